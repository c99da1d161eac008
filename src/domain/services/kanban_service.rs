// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::deal::Deal;
use crate::domain::models::stage::Stage;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 看板拖拽目标的阶段列前缀
const STAGE_TARGET_PREFIX: &str = "stage-";
/// 看板拖拽目标的交易卡片前缀
const DEAL_TARGET_PREFIX: &str = "deal-";

/// 对内存中的交易列表应用一次乐观阶段移动
///
/// 返回的列表与输入等长且ID集合一致：匹配 `deal_id` 的交易
/// 获得新的 `stage` 和 `updated_at`，其余交易原样保留。
/// 交易当前阶段已等于目标阶段时，或 `deal_id` 不在列表中时，
/// 原列表原样返回，不产生任何变更（避免无谓的更新和重渲染）。
///
/// # 参数
///
/// * `deals` - 当前交易列表
/// * `deal_id` - 被移动的交易ID
/// * `next_stage` - 目标阶段
/// * `next_updated_at` - 变更时间戳
///
/// # 返回值
///
/// 返回应用移动后的交易列表
pub fn apply_optimistic_stage_move(
    deals: Vec<Deal>,
    deal_id: Uuid,
    next_stage: Stage,
    next_updated_at: DateTime<Utc>,
) -> Vec<Deal> {
    // Unknown deal or same-stage move: explicit no-op, never an error
    let already_there = deals
        .iter()
        .find(|deal| deal.id == deal_id)
        .map(|deal| deal.stage == next_stage);
    match already_there {
        None | Some(true) => return deals,
        Some(false) => {}
    }

    deals
        .into_iter()
        .map(|mut deal| {
            if deal.id == deal_id {
                deal.stage = next_stage;
                deal.updated_at = next_updated_at;
            }
            deal
        })
        .collect()
}

/// 解析看板拖拽放置目标
///
/// 放置目标以两种形式标识：阶段列（`stage-<id>`）或另一张
/// 交易卡片（`deal-<id>`，语义为"落入该交易所在的列"）。
/// 无法识别的目标返回 `None`，调用方按取消拖拽处理。
///
/// # 参数
///
/// * `drop_target_id` - 放置目标标识符
/// * `deals` - 当前交易列表，用于解析卡片目标
///
/// # 返回值
///
/// 返回目标阶段，目标无法识别时返回 `None`
pub fn resolve_drop_target(drop_target_id: &str, deals: &[Deal]) -> Option<Stage> {
    if let Some(raw_stage) = drop_target_id.strip_prefix(STAGE_TARGET_PREFIX) {
        return raw_stage.parse::<Stage>().ok();
    }

    if let Some(raw_id) = drop_target_id.strip_prefix(DEAL_TARGET_PREFIX) {
        let target_id = Uuid::parse_str(raw_id).ok()?;
        return deals
            .iter()
            .find(|deal| deal.id == target_id)
            .map(|deal| deal.stage);
    }

    None
}

#[cfg(test)]
#[path = "kanban_service_test.rs"]
mod tests;
