use serde::{Deserialize, Serialize};

/// A trivia question with its answer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TriviaItem {
    pub question: String,
    pub answer: String,
}

/// Query parameters for `/trivia`
#[derive(Debug, Default, Deserialize)]
pub struct TriviaQuery {
    /// Defaults to `general`
    pub category: Option<String>,
}

/// Questions grouped by category, in declaration order
#[derive(Debug, Clone)]
pub struct TriviaBank {
    categories: Vec<(String, Vec<TriviaItem>)>,
}

impl TriviaBank {
    /// Questions for a lowercase category key
    pub fn category(&self, name: &str) -> Option<&[TriviaItem]> {
        self.categories
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, items)| items.as_slice())
    }
}

fn item(question: &str, answer: &str) -> TriviaItem {
    TriviaItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn dataset() -> TriviaBank {
    TriviaBank {
        categories: vec![
            (
                "general".to_string(),
                vec![
                    item("What is the capital of France?", "Paris"),
                    item("What planet is known as the Red Planet?", "Mars"),
                ],
            ),
            (
                "science".to_string(),
                vec![
                    item("What is the chemical symbol for water?", "H₂O"),
                    item(
                        "What gas do plants absorb from the atmosphere?",
                        "Carbon Dioxide",
                    ),
                ],
            ),
            (
                "history".to_string(),
                vec![
                    item(
                        "Who was the first President of the United States?",
                        "George Washington",
                    ),
                    item("In which year did World War II end?", "1945"),
                ],
            ),
            (
                "sports".to_string(),
                vec![
                    item("How many players are there in a football team?", "11"),
                    item("Which country won the FIFA World Cup in 2018?", "France"),
                ],
            ),
            (
                "tech".to_string(),
                vec![
                    item("Who founded Microsoft?", "Bill Gates"),
                    item("What does 'CPU' stand for?", "Central Processing Unit"),
                ],
            ),
        ],
    }
}
