//! Factory functions for quiz text.

/// Generate quiz text with `num_questions` well-formed blocks.
///
/// Question `i` (1-based) has its correct answer on option B.
pub fn sample_quiz_text(num_questions: usize) -> String {
    (1..=num_questions)
        .map(|i| {
            format!(
                "{}. Question {}?\nA) Option {}a\nB) Option {}b\nC) Option {}c\nD) Option {}d\nRespuesta: B\n",
                i, i, i, i, i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A block with only three options and no answer line.
pub fn incomplete_block(number: usize) -> String {
    format!("{}. Broken question\nA) one\nB) two\nC) three\n", number)
}
