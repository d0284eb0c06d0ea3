/// Label used for the middle stretch of every session.
pub const MIDDLE_LEVEL: &str = "college";

/// Maps an iteration index to the complexity label for its question.
///
/// The first 30% of iterations use the starting level, the next 40% use
/// [`MIDDLE_LEVEL`], and the final 30% use the ending level. Brackets
/// compare with strict less-than against fractional cutoffs, so an index
/// landing exactly on a cutoff takes the later bracket.
pub fn level_for<'a>(iteration: usize, total: usize, start: &'a str, end: &'a str) -> &'a str {
    let cutoff = |fraction: f64| (total as f64) * fraction;
    if (iteration as f64) < cutoff(0.3) {
        start
    } else if (iteration as f64) < cutoff(0.7) {
        MIDDLE_LEVEL
    } else {
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_for_ten_iterations() {
        for i in 0..3 {
            assert_eq!(level_for(i, 10, "high-school", "graduate"), "high-school");
        }
        for i in 3..7 {
            assert_eq!(level_for(i, 10, "high-school", "graduate"), "college");
        }
        for i in 7..10 {
            assert_eq!(level_for(i, 10, "high-school", "graduate"), "graduate");
        }
    }

    #[test]
    fn exact_cutoffs_fall_into_the_later_bracket() {
        // 10 * 0.3 == 3.0 and 10 * 0.7 == 7.0 exactly.
        assert_eq!(level_for(3, 10, "a", "b"), "college");
        assert_eq!(level_for(7, 10, "a", "b"), "b");
    }

    #[test]
    fn single_iteration_uses_the_start_level() {
        assert_eq!(level_for(0, 1, "intuitive", "formal"), "intuitive");
    }

    #[test]
    fn default_session_length_brackets() {
        assert_eq!(level_for(14, 50, "high-school", "graduate"), "high-school");
        assert_eq!(level_for(15, 50, "high-school", "graduate"), "college");
        assert_eq!(level_for(34, 50, "high-school", "graduate"), "college");
        assert_eq!(level_for(35, 50, "high-school", "graduate"), "graduate");
        assert_eq!(level_for(49, 50, "high-school", "graduate"), "graduate");
    }

    #[test]
    fn identical_inputs_always_agree() {
        for n in 1..40 {
            for i in 0..n {
                assert_eq!(level_for(i, n, "s", "e"), level_for(i, n, "s", "e"));
            }
        }
    }
}
