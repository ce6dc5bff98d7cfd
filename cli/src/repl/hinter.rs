use super::completer::{unique_completion, word_start};

pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() || line.starts_with('.') {
        return None;
    }

    let start = word_start(line);
    let word = &line[start..];
    if word.is_empty() {
        return None;
    }

    unique_completion(word).map(|kw| kw[word.len()..].to_string())
}
