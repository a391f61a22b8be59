//! Static taxonomy of analysis sections and the modules each one contains.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub modules: &'static [&'static str],
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "第一部分：外部环境、战略定位与公司治理",
        modules: &[
            "1.1 宏观环境分析 (PESTEL)",
            "1.2 行业竞争环境分析 (波特五力模型)",
            "1.3 SWOT 分析",
            "1.4 公司治理与管理层素质评估",
        ],
    },
    Section {
        title: "第二部分：财务概览与经营业绩评估",
        modules: &[
            "2.0 财务报表概览与趋势分析",
            "2.1 综合比率分析",
            "2.2 杜邦分析",
            "2.3 营运资本与现金转换周期分析",
            "2.4 杠杆分析 (运营与财务)",
            "2.5 分部信息分析",
            "2.6 Piotroski F-Score 模型",
            "2.7 经济增加值 (EVA) 分析",
            "2.8 同行业基准比较分析",
        ],
    },
    Section {
        title: "第三部分：盈利质量与会计政策分析",
        modules: &[
            "3.1 财务报表附注深度解读与关键会计政策评估",
            "3.2 经营活动现金流量与净利润的比较分析",
            "3.3 应计项目分析",
            "3.4 盈余管理与财务舞弊风险模型 (Beneish, Dechow理念等)",
            "3.5 自由现金流量趋势与充足性分析",
        ],
    },
    Section {
        title: "第四部分：信用风险与偿债能力评估",
        modules: &[
            "4.1 营运资金充足性与短期流动性风险",
            "4.2 利息保障倍数及现金流偿债能力分析",
            "4.3 Altman Z-Score",
            "4.4 Ohlson O-Score (如适用)",
            "4.5 其他财务困境预测模型 (如Zmijewski X-Score, 可选)",
        ],
    },
    Section {
        title: "第五部分：增长潜力与可持续性分析",
        modules: &[
            "5.1 盈利与现金流增长匹配度分析",
            "5.2 再投资率 (RR) 与投入资本回报率 (ROIC) 分析",
            "5.3 可持续增长率模型 (SGR)",
            "5.4 内部增长率模型 (IGR)",
        ],
    },
    Section {
        title: "第六部分：财务预测与建模",
        modules: &[
            "6.0 统计预测与趋势外推 (可选)",
            "6.1 销售收入预测",
            "6.2 成本与费用结构预测",
            "6.3 资产负债表项目预测",
            "6.4 构建三表联动财务模型",
            "6.5 情景分析与敏感性测试",
        ],
    },
    Section {
        title: "第七部分：公司估值",
        modules: &[
            "7.1 公司自由现金流折现模型 (FCFF)",
            "7.2 股权自由现金流折现模型 (FCFE)",
            "7.3 股利贴现模型 (DDM)",
            "7.4 剩余收益模型 (RIM)",
            "7.5 可比公司分析 (市场乘数法)",
            "7.6 基于调整后账面价值的估值",
        ],
    },
];

pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Every module title, sections in declaration order and modules in
/// declaration order within each section.
pub fn all_modules() -> Vec<&'static str> {
    SECTIONS
        .iter()
        .flat_map(|section| section.modules.iter().copied())
        .collect()
}
