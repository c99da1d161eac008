// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 交易阶段枚举
///
/// 表示交易在销售管道中所处的规范阶段。管道由五个固定阶段组成，
/// 每个阶段对应看板上的一列。历史数据和本地化数据中存在的
/// 别名值通过别名表统一归一化到这五个规范阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// 潜在客户，交易进入管道的初始阶段
    #[default]
    Lead,
    /// 提案阶段，已向客户发送提案
    Proposal,
    /// 谈判阶段，正在与客户协商条款
    Negotiation,
    /// 已赢单，交易成功关闭
    Won,
    /// 已输单，交易失败关闭
    Lost,
}

/// 阶段配置
///
/// 将一个规范阶段与其全部可识别的持久化值（别名）关联起来。
/// 别名集合包含规范名称本身、数据库值以及遗留/本地化值。
#[derive(Debug, Clone, Copy)]
pub struct StageConfig {
    /// 规范阶段
    pub id: Stage,
    /// 可识别的持久化值集合（全部小写）
    pub db_values: &'static [&'static str],
}

// Alias sets must stay pairwise disjoint after lowercasing; the first
// value of each set is the canonical db value.
const STAGE_CONFIGS: [StageConfig; 5] = [
    StageConfig {
        id: Stage::Lead,
        db_values: &["lead", "new", "potansiyel", "musteri_adayi"],
    },
    StageConfig {
        id: Stage::Proposal,
        db_values: &["proposal", "offer", "teklif", "teklif_gonderildi"],
    },
    StageConfig {
        id: Stage::Negotiation,
        db_values: &["negotiation", "gorusme", "muzakere", "pazarlik"],
    },
    StageConfig {
        id: Stage::Won,
        db_values: &["won", "win", "closed_won", "kazanildi", "kazanıldı"],
    },
    StageConfig {
        id: Stage::Lost,
        db_values: &["lost", "closed_lost", "kaybedildi"],
    },
];

impl Stage {
    /// 归一化任意阶段字符串
    ///
    /// 对输入去除首尾空白并转为小写后，在各阶段的别名集合中查找。
    /// 未匹配任何别名时回退到 `Stage::Lead`。总函数，永不失败。
    ///
    /// # 参数
    ///
    /// * `input` - 任意阶段字符串（持久化值、别名或大小写变体）
    ///
    /// # 返回值
    ///
    /// 返回匹配的规范阶段，未匹配时返回 `Stage::Lead`
    pub fn normalize(input: &str) -> Stage {
        Stage::from_str(input).unwrap_or_default()
    }

    /// 获取规范持久化值
    ///
    /// 每个阶段恰好有一个数据库表示，满足
    /// `Stage::normalize(s.db_value()) == s`。
    pub fn db_value(&self) -> &'static str {
        match self {
            Stage::Lead => "lead",
            Stage::Proposal => "proposal",
            Stage::Negotiation => "negotiation",
            Stage::Won => "won",
            Stage::Lost => "lost",
        }
    }

    /// 获取完整的阶段别名表
    ///
    /// 供下游消费者使用，如构建下拉列表或校验Webhook事件负载。
    pub fn configs() -> &'static [StageConfig] {
        &STAGE_CONFIGS
    }

    /// 判断阶段是否为终态（已赢单或已输单）
    pub fn is_closed(&self) -> bool {
        matches!(self, Stage::Won | Stage::Lost)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.db_value())
    }
}

impl FromStr for Stage {
    type Err = ();

    /// 严格解析：仅匹配已注册的别名，未匹配返回错误。
    /// 需要宽松回退语义的调用方使用 `Stage::normalize`。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        STAGE_CONFIGS
            .iter()
            .find(|config| config.db_values.contains(&needle.as_str()))
            .map(|config| config.id)
            .ok_or(())
    }
}

#[cfg(test)]
#[path = "stage_test.rs"]
mod tests;
