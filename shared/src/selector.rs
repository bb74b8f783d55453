use crate::constants::WEIGHT_SCALE;
use crate::random::RandomSource;
use crate::rewards::{RewardEntry, RewardTable};

/// Picks a reward by weight. Returns the segment index together with the entry.
pub fn select_reward<'a, R>(table: &'a RewardTable, rng: &mut R) -> (usize, &'a RewardEntry)
where
    R: RandomSource + ?Sized,
{
    let draw = rng.next_f64() * WEIGHT_SCALE;
    select_by_draw(table, draw)
}

/// Maps a draw in `[0, 100)` onto the table: the first entry whose cumulative
/// weight is at least `draw` wins.
///
/// A draw past the last boundary (weights short of 100, or float drift) yields
/// the first entry. This never-fail fallback is intentional and must not be
/// "fixed" by rescaling weights.
pub fn select_by_draw(table: &RewardTable, draw: f64) -> (usize, &RewardEntry) {
    let mut cumulative = 0.0;
    for (index, entry) in table.iter().enumerate() {
        cumulative += entry.weight;
        if draw <= cumulative {
            return (index, entry);
        }
    }

    log::debug!("Draw {} is past the last boundary {}, using first reward", draw, cumulative);
    (0, table.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use crate::testing::weights_table;

    fn standard_table() -> RewardTable {
        weights_table(&[40.0, 30.0, 15.0, 10.0, 5.0])
    }

    #[test]
    fn test_zero_draw_picks_first() {
        let table = standard_table();
        let (index, entry) = select_reward(&table, &mut || 0.0);
        assert_eq!(index, 0);
        assert_eq!(entry.weight, 40.0);
    }

    #[test]
    fn test_high_draw_picks_last() {
        let table = standard_table();
        let (index, entry) = select_reward(&table, &mut || 0.99);
        assert_eq!(index, 4);
        assert_eq!(entry.weight, 5.0);
    }

    #[test]
    fn test_boundaries() {
        let table = standard_table();
        // (draw, expected) around each cumulative boundary: 40, 70, 85, 95
        let cases = [
            (39.999, 0),
            (40.0, 0),
            (40.001, 1),
            (69.999, 1),
            (70.001, 2),
            (84.999, 2),
            (85.001, 3),
            (94.999, 3),
            (95.001, 4),
            (99.999, 4),
        ];
        for (draw, expected) in cases {
            assert_eq!(select_by_draw(&table, draw).0, expected, "draw {}", draw);
        }
    }

    #[test]
    fn test_monotonic_over_draws() {
        let table = standard_table();
        let mut previous = 0;
        let mut draw = 0.0;
        while draw < 100.0 {
            let (index, _) = select_by_draw(&table, draw);
            assert!(index >= previous, "index went backwards at {}", draw);
            assert!(index < table.len());
            previous = index;
            draw += 0.05;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn test_short_table_falls_back_to_first() {
        let table = weights_table(&[20.0, 30.0]);
        assert_eq!(select_by_draw(&table, 10.0).0, 0);
        assert_eq!(select_by_draw(&table, 45.0).0, 1);
        assert_eq!(select_by_draw(&table, 80.0).0, 0);
        assert_eq!(select_reward(&table, &mut || 0.75).0, 0);
    }

    #[test]
    fn test_table_untouched() {
        let table = standard_table();
        let before = table.clone();
        let mut rng = SequenceSource::new(vec![0.05, 0.5, 0.72, 0.9, 0.97]);
        for _ in 0..10 {
            select_reward(&table, &mut rng);
        }
        assert_eq!(table, before);
        assert_eq!(rng.draws(), 10);
    }
}
