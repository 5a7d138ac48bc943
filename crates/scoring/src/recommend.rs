//! Category recommendations keyed by score band.

use serde::Serialize;

use maturity_catalog::Category;

use crate::engine::ScoreResult;

/// Score band for one category, selecting which recommendation card to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    Low,
    Medium,
    High,
}

impl RecommendationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationLevel::Low => "low",
            RecommendationLevel::Medium => "medium",
            RecommendationLevel::High => "high",
        }
    }
}

impl core::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band a category average: `avg <= 2.5` is low, `2.5 < avg <= 4` is medium,
/// anything above is high. Each boundary value belongs to the lower band.
pub fn recommend(category_average: f64) -> RecommendationLevel {
    if category_average <= 2.5 {
        RecommendationLevel::Low
    } else if category_average <= 4.0 {
        RecommendationLevel::Medium
    } else {
        RecommendationLevel::High
    }
}

/// One recommendation card: what to tell the respondent and which product
/// modules the follow-up conversation should lead with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub level: RecommendationLevel,
    pub title: &'static str,
    pub advice: &'static str,
    pub modules: &'static [&'static str],
}

/// Static card table covering every category×level pair. A missing pair is a
/// configuration error: the affected card is skipped, never invented.
pub const RECOMMENDATIONS: [Recommendation; 15] = [
    Recommendation {
        category: Category::Strategy,
        level: RecommendationLevel::Low,
        title: "Put a roadmap on paper",
        advice: "Start with a 12-month digitalization plan that names owners and budgets, \
                 and pick the two processes where an integrated system removes the most \
                 manual work.",
        modules: &["Finance", "Inventory"],
    },
    Recommendation {
        category: Category::Strategy,
        level: RecommendationLevel::Medium,
        title: "Connect strategy to execution",
        advice: "Tie each roadmap initiative to a measurable process outcome and review \
                 progress quarterly with the leadership team.",
        modules: &["Business Intelligence", "Finance"],
    },
    Recommendation {
        category: Category::Strategy,
        level: RecommendationLevel::High,
        title: "Scale what works",
        advice: "Extend your portfolio process to adjacent business lines and let \
                 operating data drive the next wave of investments.",
        modules: &["Business Intelligence", "Manufacturing"],
    },
    Recommendation {
        category: Category::Customer,
        level: RecommendationLevel::Low,
        title: "Centralize customer data",
        advice: "Move contacts and interaction history out of inboxes and spreadsheets \
                 into one shared system before adding any new channel.",
        modules: &["CRM"],
    },
    Recommendation {
        category: Category::Customer,
        level: RecommendationLevel::Medium,
        title: "Close the loop with sales and support",
        advice: "Connect quotes, orders and tickets to the customer record so every team \
                 sees the same history.",
        modules: &["CRM", "E-commerce"],
    },
    Recommendation {
        category: Category::Customer,
        level: RecommendationLevel::High,
        title: "Let customers self-serve",
        advice: "Expose order status, documents and reordering in a customer portal and \
                 measure adoption monthly.",
        modules: &["E-commerce", "CRM"],
    },
    Recommendation {
        category: Category::Operations,
        level: RecommendationLevel::Low,
        title: "Remove double data entry",
        advice: "Map where orders are retyped between tools and consolidate those steps \
                 into a single flow first.",
        modules: &["Inventory", "Procurement"],
    },
    Recommendation {
        category: Category::Operations,
        level: RecommendationLevel::Medium,
        title: "Automate the exceptions",
        advice: "Define tolerance rules so routine documents post automatically and \
                 people only touch the outliers.",
        modules: &["Procurement", "Manufacturing"],
    },
    Recommendation {
        category: Category::Operations,
        level: RecommendationLevel::High,
        title: "Optimize with live signals",
        advice: "Use real-time consumption and lead-time data to tune replenishment and \
                 production schedules continuously.",
        modules: &["Manufacturing", "Inventory"],
    },
    Recommendation {
        category: Category::Technology,
        level: RecommendationLevel::Low,
        title: "Consolidate your systems",
        advice: "Inventory every tool in use, retire the duplicates, and pick one system \
                 of record per domain.",
        modules: &["Finance", "Document Management"],
    },
    Recommendation {
        category: Category::Technology,
        level: RecommendationLevel::Medium,
        title: "Integrate the core",
        advice: "Replace file exports between your core systems with managed interfaces \
                 and one shared item and customer master.",
        modules: &["Inventory", "Finance"],
    },
    Recommendation {
        category: Category::Technology,
        level: RecommendationLevel::High,
        title: "Govern your platform",
        advice: "Formalize API ownership, access reviews and data quality metrics so \
                 integration keeps pace with growth.",
        modules: &["Business Intelligence", "Document Management"],
    },
    Recommendation {
        category: Category::People,
        level: RecommendationLevel::Low,
        title: "Build digital confidence",
        advice: "Pair every new tool rollout with hands-on training and a named go-to \
                 person per team.",
        modules: &["HR"],
    },
    Recommendation {
        category: Category::People,
        level: RecommendationLevel::Medium,
        title: "Make training routine",
        advice: "Move from ad hoc help to role-based learning paths with time reserved \
                 for them each quarter.",
        modules: &["HR", "Document Management"],
    },
    Recommendation {
        category: Category::People,
        level: RecommendationLevel::High,
        title: "Turn users into improvers",
        advice: "Give experienced users a channel to propose and pilot process \
                 improvements, and celebrate the wins.",
        modules: &["HR", "Business Intelligence"],
    },
];

/// Table lookup. `None` signals a configuration gap the caller skips over.
pub fn recommendation_for(
    category: Category,
    level: RecommendationLevel,
) -> Option<&'static Recommendation> {
    RECOMMENDATIONS
        .iter()
        .find(|r| r.category == category && r.level == level)
}

/// Cards for a score result, in category order. Gaps in the table are
/// omitted rather than rendered as errors.
pub fn recommended_actions(result: &ScoreResult) -> Vec<&'static Recommendation> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            recommendation_for(category, recommend(result.category_average(category)))
        })
        .collect()
}
