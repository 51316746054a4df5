/// Read-side helpers over a token snapshot: sorting, text search, watchlist
use crate::screener::prefs::Preferences;
use crate::screener::token::Token;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Composite hype score, highest first
    Trending,
    /// 24h volume, highest first
    Volume,
    /// 24h price change, highest first
    Gainers,
    /// Youngest pairs first
    Age,
}

impl SortMode {
    pub fn parse(value: &str) -> Option<SortMode> {
        match value.to_ascii_lowercase().as_str() {
            "trending" => Some(SortMode::Trending),
            "volume" => Some(SortMode::Volume),
            "gainers" => Some(SortMode::Gainers),
            "age" => Some(SortMode::Age),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Trending => "trending",
            SortMode::Volume => "volume",
            SortMode::Gainers => "gainers",
            SortMode::Age => "age",
        }
    }
}

/// Stable in-place sort under the given mode
pub fn sort_tokens(tokens: &mut [Token], mode: SortMode) {
    match mode {
        SortMode::Trending => tokens.sort_by(|a, b| b.score.cmp(&a.score)),
        SortMode::Volume => tokens.sort_by(|a, b| desc_f64(a.volume_24h, b.volume_24h)),
        SortMode::Gainers => {
            tokens.sort_by(|a, b| desc_f64(a.price_change_24h, b.price_change_24h))
        }
        SortMode::Age => tokens.sort_by_key(|t| age_label_minutes(&t.age)),
    }
}

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Convert an age label back to minutes for sorting; "NEW" counts as zero
fn age_label_minutes(age: &str) -> u64 {
    let digits: String = age.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: u64 = digits.parse().unwrap_or(0);

    if age.ends_with('h') {
        value * 60
    } else if age.ends_with('d') {
        value * 1440
    } else {
        value
    }
}

/// Case-insensitive substring match over name and symbol
pub fn filter_tokens<'a>(tokens: &'a [Token], query: &str) -> Vec<&'a Token> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tokens.iter().collect();
    }

    tokens
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) || t.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn watchlist_tokens<'a>(tokens: &'a [Token], prefs: &Preferences) -> Vec<&'a Token> {
    tokens
        .iter()
        .filter(|t| prefs.is_watched(&t.address))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str, score: u32, volume: f64, change: f64, age: &str) -> Token {
        Token {
            address: format!("mint-{}", symbol),
            name: format!("{} Coin", symbol),
            symbol: symbol.to_string(),
            score,
            volume_24h: volume,
            price_change_24h: change,
            age: age.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Token> {
        vec![
            token("AAA", 100, 5000.0, -2.0, "3h"),
            token("BBB", 900, 1000.0, 45.0, "NEW"),
            token("CCC", 500, 9000.0, 10.0, "2d"),
            token("DDD", 500, 2000.0, 10.0, "30m"),
        ]
    }

    fn order(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.symbol.as_str()).collect()
    }

    #[test]
    fn test_parse_sort_mode() {
        assert_eq!(SortMode::parse("trending"), Some(SortMode::Trending));
        assert_eq!(SortMode::parse("VOLUME"), Some(SortMode::Volume));
        assert_eq!(SortMode::parse("gainers"), Some(SortMode::Gainers));
        assert_eq!(SortMode::parse("age"), Some(SortMode::Age));
        assert_eq!(SortMode::parse("bogus"), None);
    }

    #[test]
    fn test_sort_trending_is_stable_on_ties() {
        let mut tokens = sample();
        sort_tokens(&mut tokens, SortMode::Trending);
        // CCC and DDD tie at 500 and keep their input order
        assert_eq!(order(&tokens), vec!["BBB", "CCC", "DDD", "AAA"]);
    }

    #[test]
    fn test_sort_volume() {
        let mut tokens = sample();
        sort_tokens(&mut tokens, SortMode::Volume);
        assert_eq!(order(&tokens), vec!["CCC", "AAA", "DDD", "BBB"]);
    }

    #[test]
    fn test_sort_gainers() {
        let mut tokens = sample();
        sort_tokens(&mut tokens, SortMode::Gainers);
        assert_eq!(order(&tokens), vec!["BBB", "CCC", "DDD", "AAA"]);
    }

    #[test]
    fn test_sort_age_puts_new_first() {
        let mut tokens = sample();
        sort_tokens(&mut tokens, SortMode::Age);
        assert_eq!(order(&tokens), vec!["BBB", "DDD", "AAA", "CCC"]);
    }

    #[test]
    fn test_age_label_minutes() {
        assert_eq!(age_label_minutes("5m"), 5);
        assert_eq!(age_label_minutes("2h"), 120);
        assert_eq!(age_label_minutes("3d"), 4320);
        assert_eq!(age_label_minutes("NEW"), 0);
        assert_eq!(age_label_minutes(""), 0);
    }

    #[test]
    fn test_filter_matches_name_and_symbol() {
        let tokens = sample();

        let by_symbol = filter_tokens(&tokens, "bbb");
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol, "BBB");

        let by_name = filter_tokens(&tokens, "ccc coin");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "CCC");
    }

    #[test]
    fn test_filter_blank_query_returns_all() {
        let tokens = sample();
        assert_eq!(filter_tokens(&tokens, "  ").len(), tokens.len());
    }

    #[test]
    fn test_watchlist_tokens() {
        let tokens = sample();
        let mut prefs = Preferences::default();
        prefs.toggle_watchlist("mint-CCC");
        prefs.toggle_watchlist("mint-AAA");

        let watched = watchlist_tokens(&tokens, &prefs);
        assert_eq!(order_refs(&watched), vec!["AAA", "CCC"]);
    }

    fn order_refs(tokens: &[&Token]) -> Vec<String> {
        tokens.iter().map(|t| t.symbol.clone()).collect()
    }
}
