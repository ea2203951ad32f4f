/// Task color palette and layout hints
///
/// Every todo is stamped at creation with one style token drawn uniformly at
/// random from a fixed 14-entry palette of CSS gradient snippets. The token is
/// stored on the row and never changes afterwards.
///
/// The column hint is a pure presentation derivation handed to the page
/// renderer; it is not persisted.

use rand::seq::SliceRandom;
use rand::Rng;

/// The fixed 14-entry palette of CSS style tokens assigned to new todos
pub const PALETTE: [&str; 14] = [
    "background-color: #FA8BFF; background-image: linear-gradient(19deg, #FA8BFF 0%, #2BD2FF 52%, #2BFF88 90%); color:white;",
    "background-color: #21D4FD; background-image: linear-gradient(19deg, #21D4FD 0%, #B721FF 100%); color:white;",
    "background-color: #FEE140; background-image: linear-gradient(19deg, #FEE140 0%, #FA709A 100%); color:white;",
    "background-color: #FEE140; background-image: linear-gradient(19deg, #FEE140 0%, #FA709A 100%); color:white;",
    "background-color: #4158D0; background-image: linear-gradient(19deg, #4158D0 0%, #C850C0 46%, #FFCC70 100%); color:white;",
    "background-color: #F4D03F; background-image: linear-gradient(19deg, #F4D03F 0%, #16A085 100%); color:white",
    "background-color: #74EBD5; background-image: linear-gradient(19deg, #74EBD5 0%, #9FACE6 100%); color:white",
    "background-image: linear-gradient( 19deg,  rgba(61,245,167,1) 11.2%, rgba(9,111,224,1) 91.1% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(245,116,185,1) 14.7%, rgba(89,97,223,1) 88.7% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(71,139,214,1) 23.3%, rgba(37,216,211,1) 84.7% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(201,37,107,1) 15.4%, rgba(116,16,124,1) 74.7% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(115,18,81,1) 10.6%, rgba(28,28,28,1) 118% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(31,212,248,1) 11%, rgba(218,15,183,1) 74.9% ); color:white",
    "background-image: linear-gradient( 19deg,  rgba(24,138,141,1) 11.2%, rgba(96,221,142,1) 91.1% ); color:white",
];

/// Picks a palette token uniformly at random
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // PALETTE is non-empty, so choose cannot fail
    PALETTE.choose(rng).copied().unwrap_or(PALETTE[0])
}

/// Derives the column count used to lay out a user's task list
///
/// Returns `((count - 1) mod 4) + 1` when the user has at least one task,
/// otherwise 1. The resulting hint cycles 1, 2, 3, 4, 1, ... as the list grows.
pub fn column_hint(task_count: usize) -> usize {
    if task_count == 0 {
        1
    } else {
        (task_count - 1) % 4 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_has_fourteen_entries() {
        assert_eq!(PALETTE.len(), 14);
    }

    #[test]
    fn test_random_color_is_palette_member() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let color = random_color(&mut rng);
            assert!(PALETTE.contains(&color));
        }
    }

    #[test]
    fn test_random_color_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks: std::collections::HashSet<&str> =
            (0..100).map(|_| random_color(&mut rng)).collect();
        assert!(picks.len() > 1, "100 draws should hit more than one color");
    }

    #[test]
    fn test_column_hint_cycles() {
        assert_eq!(column_hint(0), 1);
        assert_eq!(column_hint(1), 1);
        assert_eq!(column_hint(2), 2);
        assert_eq!(column_hint(3), 3);
        assert_eq!(column_hint(4), 4);
        assert_eq!(column_hint(5), 1);
        assert_eq!(column_hint(8), 4);
        assert_eq!(column_hint(9), 1);
    }
}
