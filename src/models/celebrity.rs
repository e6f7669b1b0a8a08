use serde::Deserialize;

/// Headlines about one celebrity
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrityNews {
    /// Title-cased display name, used as the lookup key
    pub name: String,
    pub headlines: Vec<String>,
}

/// Query parameters for `/celebrity-news`
#[derive(Debug, Default, Deserialize)]
pub struct CelebrityNewsQuery {
    pub name: Option<String>,
}

fn celebrity(name: &str, headlines: [&str; 2]) -> CelebrityNews {
    CelebrityNews {
        name: name.to_string(),
        headlines: headlines.iter().map(|h| h.to_string()).collect(),
    }
}

pub fn dataset() -> Vec<CelebrityNews> {
    vec![
        celebrity(
            "Taylor Swift",
            [
                "Taylor Swift announces new album release date.",
                "Taylor Swift's tour tickets sold out in 10 minutes.",
            ],
        ),
        celebrity(
            "Tom Holland",
            [
                "Tom Holland signs on for new Spider-Man movie.",
                "Tom Holland and Zendaya spotted at award show.",
            ],
        ),
        celebrity(
            "Zendaya",
            [
                "Zendaya wins Best Actress at the Emmys.",
                "Zendaya debuts new fashion line at Paris Fashion Week.",
            ],
        ),
        celebrity(
            "Dwayne Johnson",
            [
                "Dwayne Johnson teases new action movie on Instagram.",
                "The Rock surprises fans at movie premiere.",
            ],
        ),
        celebrity(
            "Billie Eilish",
            [
                "Billie Eilish drops new single overnight.",
                "Billie Eilish speaks about climate change activism.",
            ],
        ),
    ]
}
