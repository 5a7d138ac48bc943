//! Built-in questionnaire shipped with the product.

use crate::question::{AnswerOption, Category, Question, QuestionCatalog, QuestionId};

fn question(id: &str, category: Category, prompt: &str, options: &[(&str, u8)]) -> Question {
    Question {
        id: QuestionId::new(id),
        category,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(label, score)| AnswerOption {
                label: (*label).to_string(),
                score: *score,
            })
            .collect(),
    }
}

/// The default catalog: 15 questions, three per category, presented in this
/// order. Option scores all lie in [1, 5].
pub fn default_catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        question(
            "q01",
            Category::Strategy,
            "How would you describe your company's digital transformation roadmap?",
            &[
                ("We have no documented roadmap", 1),
                ("Some initiatives exist but are not coordinated", 2),
                ("A roadmap exists and is reviewed yearly", 4),
                ("A funded roadmap is reviewed quarterly with executive sponsorship", 5),
            ],
        ),
        question(
            "q02",
            Category::Strategy,
            "How are technology investments prioritized?",
            &[
                ("Reactively, when something breaks", 1),
                ("By individual department budgets", 2),
                ("Through an annual IT plan", 3),
                ("Against documented business cases", 4),
                ("Through a portfolio process tied to strategic goals", 5),
            ],
        ),
        question(
            "q03",
            Category::Strategy,
            "Who owns digital initiatives in your organization?",
            &[
                ("Nobody in particular", 1),
                ("The IT department on its own", 3),
                ("A cross-functional team with executive sponsorship", 5),
            ],
        ),
        question(
            "q04",
            Category::Customer,
            "How do you track interactions with customers and prospects?",
            &[
                ("Spreadsheets or personal inboxes", 1),
                ("A shared contact list", 2),
                ("A CRM used by part of the team", 4),
                ("A CRM integrated with sales, marketing and support", 5),
            ],
        ),
        question(
            "q05",
            Category::Customer,
            "How quickly can you answer a customer's question about their order status?",
            &[
                ("We have to call the warehouse", 1),
                ("Within a day, after checking several systems", 2),
                ("Within hours, from one system", 3),
                ("In minutes, from a shared dashboard", 4),
                ("Customers see it themselves in a portal", 5),
            ],
        ),
        question(
            "q06",
            Category::Customer,
            "How do you collect and act on customer feedback?",
            &[
                ("We don't collect it systematically", 1),
                ("Surveys that get reviewed occasionally", 3),
                ("Continuous feedback feeding a prioritized backlog", 5),
            ],
        ),
        question(
            "q07",
            Category::Operations,
            "How much of your order-to-invoice process runs without manual re-entry?",
            &[
                ("Almost none, data is retyped between systems", 1),
                ("Some steps are automated", 2),
                ("Most steps flow automatically", 4),
                ("The full cycle is automated, with exceptions flagged", 5),
            ],
        ),
        question(
            "q08",
            Category::Operations,
            "How do you manage inventory levels?",
            &[
                ("Physical counts and intuition", 1),
                ("Spreadsheets updated weekly", 2),
                ("Software updated daily", 3),
                ("Real-time tracking in one system", 4),
                ("Real-time tracking with automatic replenishment", 5),
            ],
        ),
        question(
            "q09",
            Category::Operations,
            "When a process fails, how do you find out?",
            &[
                ("A customer or supplier tells us", 1),
                ("Someone notices during a routine check", 3),
                ("Monitoring alerts the responsible team automatically", 5),
            ],
        ),
        question(
            "q10",
            Category::Technology,
            "How integrated are your business systems?",
            &[
                ("Isolated tools with manual exports", 1),
                ("A few point-to-point connections", 2),
                ("Core systems share data automatically", 4),
                ("A single integrated platform or well-governed APIs", 5),
            ],
        ),
        question(
            "q11",
            Category::Technology,
            "Where does your business-critical data live?",
            &[
                ("Local machines and email attachments", 1),
                ("Shared network drives", 2),
                ("Departmental databases", 3),
                ("Centralized systems with controlled access", 4),
                ("A governed platform with audited access and backups", 5),
            ],
        ),
        question(
            "q12",
            Category::Technology,
            "How does data inform day-to-day decisions?",
            &[
                ("Gut feeling and experience", 1),
                ("Monthly reports assembled by hand", 3),
                ("Live dashboards and self-service analytics", 5),
            ],
        ),
        question(
            "q13",
            Category::People,
            "How comfortable is your team with the digital tools they use daily?",
            &[
                ("They struggle, and workarounds are common", 1),
                ("Basic comfort, with frequent support requests", 2),
                ("Comfortable, with occasional training", 4),
                ("Confident, and they suggest improvements", 5),
            ],
        ),
        question(
            "q14",
            Category::People,
            "How is digital skills training handled?",
            &[
                ("It isn't", 1),
                ("Ad hoc, when someone asks", 2),
                ("During onboarding only", 3),
                ("Through a yearly training plan", 4),
                ("Through continuous learning paths per role", 5),
            ],
        ),
        question(
            "q15",
            Category::People,
            "How does your organization respond to new ways of working?",
            &[
                ("Change is resisted until unavoidable", 1),
                ("Accepted, after long transitions", 3),
                ("Embraced, with teams piloting improvements", 5),
            ],
        ),
    ])
}
