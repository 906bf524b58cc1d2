//! Mad Libs -- fill five blanks, get a poem.

use thiserror::Error;

/// What to ask the player for, in order.
pub const PROMPTS: [&str; 5] = [
    "a noun (plural)",
    "an adjective",
    "another noun (plural)",
    "a noun",
    "another adjective",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MadLibError {
    #[error("expected {expected} words, got {got}")]
    WordCount { expected: usize, got: usize },
}

/// Build the story from one word per prompt.
///
/// # Errors
/// - if `words` doesn't hold exactly one answer for each of [`PROMPTS`]
pub fn compose(words: &[String]) -> Result<Vec<String>, MadLibError> {
    let [noun1, adj1, noun2, noun3, adj2] = words else {
        return Err(MadLibError::WordCount {
            expected: PROMPTS.len(),
            got: words.len(),
        });
    };
    Ok(vec![
        format!("{noun1} are {adj1}"),
        format!("{noun2} are blue"),
        format!("{noun3} is {adj2}"),
        "And so are you!".to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn compose_fills_the_poem() {
        let story = compose(&words(&["Roses", "red", "Violets", "Sugar", "sweet"])).unwrap();
        assert_eq!(
            story,
            vec!["Roses are red", "Violets are blue", "Sugar is sweet", "And so are you!"]
        );
    }

    #[test]
    fn compose_rejects_wrong_word_count() {
        assert_eq!(
            compose(&words(&["Roses", "red"])),
            Err(MadLibError::WordCount { expected: 5, got: 2 })
        );
        assert!(compose(&[]).is_err());
    }
}
