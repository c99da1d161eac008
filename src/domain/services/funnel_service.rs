// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::funnel::ConversionFunnel;
use crate::domain::models::proposal::{Proposal, ProposalStatus, ProposalView};
use std::collections::HashSet;
use uuid::Uuid;

/// 查看段展示宽度下限
pub const VIEWED_FLEX_FLOOR: f64 = 0.32;
/// 参与段展示宽度下限
pub const ENGAGED_FLEX_FLOOR: f64 = 0.28;
/// 签署段展示宽度下限
pub const SIGNED_FLEX_FLOOR: f64 = 0.22;

/// 漏斗聚合策略
///
/// 将内嵌在聚合算术中的业务规则提炼为显式开关，
/// 使策略可以独立于收敛算术被测试和调整。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelPolicy {
    /// 参与判定阈值：单次查看停留达到该秒数即视为参与
    pub engaged_threshold_seconds: i64,
    /// 已签署的提案是否无条件计入参与（进而计入查看）
    pub signed_proposals_are_always_engaged: bool,
}

impl Default for FunnelPolicy {
    fn default() -> Self {
        Self {
            engaged_threshold_seconds: 60,
            signed_proposals_are_always_engaged: true,
        }
    }
}

/// 构建转化漏斗
///
/// 对提案和查看记录做一次纯内存聚合，产出 sent/viewed/engaged/signed
/// 四级计数、以 sent 为基数的百分比以及展示用宽度因子。
/// 收敛顺序保证即使底层数据不一致（如已签署的提案缺少查看记录），
/// 结果仍满足 `signed <= engaged <= viewed <= sent`。
/// 聚合与输入顺序无关，且永不失败：无法归类的记录不计入任何层级。
///
/// # 参数
///
/// * `proposals` - 提案快照
/// * `views` - 查看记录快照
/// * `policy` - 聚合策略
///
/// # 返回值
///
/// 返回聚合后的漏斗指标
pub fn build_conversion_funnel(
    proposals: &[Proposal],
    views: &[ProposalView],
    policy: &FunnelPolicy,
) -> ConversionFunnel {
    // Proposals with at least one view meeting the engagement threshold
    let engaged_proposals: HashSet<Uuid> = views
        .iter()
        .filter(|view| view.duration_seconds >= policy.engaged_threshold_seconds)
        .map(|view| view.proposal_id)
        .collect();

    let mut sent_raw: u64 = 0;
    let mut viewed_raw: u64 = 0;
    let mut engaged_raw: u64 = 0;
    let mut signed_raw: u64 = 0;

    for proposal in proposals {
        if proposal.status.is_sent_like() {
            sent_raw += 1;
        }
        if proposal.status.is_viewed_like() {
            viewed_raw += 1;
            if engaged_proposals.contains(&proposal.id) {
                engaged_raw += 1;
            }
        }
        if proposal.status == ProposalStatus::Signed {
            signed_raw += 1;
        }
    }

    // Clamp order matters: each level is bounded by the one above it,
    // which keeps the funnel monotonic on inconsistent data.
    let sent_count = sent_raw;
    let viewed_count = viewed_raw.min(sent_count);
    let signed_floor = if policy.signed_proposals_are_always_engaged {
        signed_raw
    } else {
        0
    };
    let engaged_count = engaged_raw.max(signed_floor).min(viewed_count);
    let signed_count = signed_raw.min(engaged_count);

    let viewed_percent = percent_of(viewed_count, sent_count);
    let engaged_percent = percent_of(engaged_count, sent_count);
    let signed_percent = percent_of(signed_count, sent_count);

    ConversionFunnel {
        sent_count,
        viewed_count,
        engaged_count,
        signed_count,
        sent_percent: if sent_count == 0 { 0 } else { 100 },
        viewed_percent,
        engaged_percent,
        signed_percent,
        viewed_flex: flex_of(viewed_percent, VIEWED_FLEX_FLOOR),
        engaged_flex: flex_of(engaged_percent, ENGAGED_FLEX_FLOOR),
        signed_flex: flex_of(signed_percent, SIGNED_FLEX_FLOOR),
    }
}

/// 计算以 total 为基数的百分比，四舍五入并收敛到 [0, 100]
fn percent_of(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let raw = (100.0 * part as f64 / total as f64).round();
    raw.clamp(0.0, 100.0) as u8
}

/// 计算展示宽度因子：百分比折算值与固定下限取较大者
///
/// 仅用于比例布局，保证每段可见，不携带业务语义。
fn flex_of(percent: u8, floor: f64) -> f64 {
    (percent as f64 / 100.0).max(floor)
}

#[cfg(test)]
#[path = "funnel_service_test.rs"]
mod tests;
