//! bracket-scanning helpers for the string parser

/// Checks that every '(' has a matching ')' and none closes early.
pub fn check_brackets(input: &str) -> Result<(), String> {
    let mut depth: i32 = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(format!("unmatched ')' at position {}", i));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unmatched '(' in expression".to_string());
    }
    Ok(())
}

/// Byte position of the ')' that pairs with the '(' at `open`.
pub fn find_pair_to_this_bracket(input: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in input.char_indices().skip_while(|&(i, _)| i < open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
