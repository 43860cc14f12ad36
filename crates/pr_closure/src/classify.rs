//! Whole-sequence classification.
//!
//! Even lengths are checked against `P`, odd lengths against `A` (after
//! completing `P`, which `A` depends on). Sequences of length zero or one
//! cannot derive from either grammar and are reported as imperfect
//! without running any closure.
//!

use std::fmt;
use log::debug;
use pr_structure::ComplementTable;
use pr_structure::Sequence;

use crate::AlmostPerfectClosure;
use crate::ClosureStats;
use crate::Pairing;
use crate::PerfectClosure;
use crate::PerfectRanges;
use crate::StemClosure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Perfect,
    AlmostPerfect,
    Imperfect,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Perfect => "perfect",
            Verdict::AlmostPerfect => "almost perfect",
            Verdict::Imperfect => "imperfect",
        };
        write!(f, "{}", s)
    }
}

/// Which closure computes the perfect ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One fact per derivable range.
    Baseline,
    /// One fact per maximal stem.
    #[default]
    Stem,
}

/// The verdict together with the work done to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    /// Statistics of the `P` closure, if it ran.
    pub perfect: Option<ClosureStats>,
    /// Statistics of the `A` closure, if it ran.
    pub almost: Option<ClosureStats>,
}

impl Classification {
    fn trivial(verdict: Verdict) -> Self {
        Self { verdict, perfect: None, almost: None }
    }
}

/// Classify a sequence as perfect, almost perfect or imperfect.
pub fn classify(sequence: &Sequence, table: &ComplementTable, strategy: Strategy) -> Verdict {
    analyze(sequence, table, strategy).verdict
}

/// Like `classify()`, but also report closure statistics.
pub fn analyze(
    sequence: &Sequence,
    table: &ComplementTable,
    strategy: Strategy,
) -> Classification {
    if sequence.len() < 2 {
        debug!("Length {} is too short for any derivation.", sequence.len());
        return Classification::trivial(Verdict::Imperfect);
    }

    let pairing = Pairing::new(sequence, table);
    match strategy {
        Strategy::Baseline => {
            let closure = PerfectClosure::new(pairing);
            conclude(pairing, closure.index(), closure.stats(), closure.is_whole_perfect())
        }
        Strategy::Stem => {
            let closure = StemClosure::new(pairing);
            conclude(pairing, closure.index(), closure.stats(), closure.is_whole_perfect())
        }
    }
}

fn conclude<P>(
    pairing: Pairing<'_>,
    perfect: &P,
    stats: ClosureStats,
    whole_perfect: bool,
) -> Classification
where
    P: PerfectRanges + ?Sized,
{
    if pairing.len() % 2 == 0 {
        let verdict = if whole_perfect { Verdict::Perfect } else { Verdict::Imperfect };
        return Classification { verdict, perfect: Some(stats), almost: None };
    }

    let almost = AlmostPerfectClosure::new(pairing, perfect);
    let verdict = if almost.is_whole_almost_perfect() {
        Verdict::AlmostPerfect
    } else {
        Verdict::Imperfect
    };
    Classification { verdict, perfect: Some(stats), almost: Some(almost.stats()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(s: &str) -> Verdict {
        let table = ComplementTable::watson_crick();
        let seq = Sequence::try_from(s).unwrap();
        let baseline = classify(&seq, &table, Strategy::Baseline);
        let stem = classify(&seq, &table, Strategy::Stem);
        assert_eq!(baseline, stem, "strategies disagree on {}", s);
        stem
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Perfect.to_string(), "perfect");
        assert_eq!(Verdict::AlmostPerfect.to_string(), "almost perfect");
        assert_eq!(Verdict::Imperfect.to_string(), "imperfect");
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(verdicts("AU"), Verdict::Perfect);
        assert_eq!(verdicts("AUAU"), Verdict::Perfect);
        assert_eq!(verdicts("AAUU"), Verdict::Perfect);
        assert_eq!(verdicts("AUCG"), Verdict::Perfect);
        assert_eq!(verdicts("AUCC"), Verdict::Imperfect);
        assert_eq!(verdicts("AAU"), Verdict::AlmostPerfect);
        assert_eq!(verdicts("AAA"), Verdict::Imperfect);
    }

    #[test]
    fn test_short_sequences() {
        assert_eq!(verdicts(""), Verdict::Imperfect);
        assert_eq!(verdicts("A"), Verdict::Imperfect);
        assert_eq!(verdicts("X"), Verdict::Imperfect);

        let table = ComplementTable::watson_crick();
        let seq = Sequence::try_from("G").unwrap();
        let report = analyze(&seq, &table, Strategy::default());
        assert_eq!(report, Classification::trivial(Verdict::Imperfect));
    }

    #[test]
    fn test_foreign_characters_never_pair() {
        assert_eq!(verdicts("AT"), Verdict::Imperfect);
        assert_eq!(verdicts("ATT"), Verdict::Imperfect);
        // A foreign byte can still be the single unpaired base.
        assert_eq!(verdicts("AXU"), Verdict::AlmostPerfect);
        // A non-ASCII character takes a single position.
        assert_eq!(verdicts("AéU"), Verdict::AlmostPerfect);
        assert_eq!(verdicts("AUé"), Verdict::AlmostPerfect);
        assert_eq!(verdicts("AéUé"), Verdict::Imperfect);
    }

    #[test]
    fn test_statistics() {
        let table = ComplementTable::watson_crick();

        let even = Sequence::try_from("GGGAAAUUUCCC").unwrap();
        let report = analyze(&even, &table, Strategy::Stem);
        assert_eq!(report.verdict, Verdict::Perfect);
        assert_eq!(report.perfect.map(|s| s.facts), Some(1));
        assert_eq!(report.almost, None);

        let odd = Sequence::try_from("GGGAAAUUUCCCA").unwrap();
        let report = analyze(&odd, &table, Strategy::Baseline);
        assert_eq!(report.verdict, Verdict::AlmostPerfect);
        assert_eq!(report.perfect.map(|s| s.facts), Some(6));
        assert!(report.almost.is_some_and(|s| s.seeds == 13));
    }
}

