use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pr_closure::AlmostPerfectClosure;
use pr_closure::Pairing;
use pr_closure::PerfectClosure;
use pr_closure::StemClosure;
use pr_closure::Strategy;
use pr_closure::Verdict;
use pr_closure::classify;
use pr_structure::ComplementTable;
use pr_structure::Range;
use pr_structure::Sequence;

const BASES: &[u8; 4] = b"ACGU";

/// Straightforward interval recursion over both grammars.
fn reference(s: &[u8], table: &ComplementTable) -> Verdict {
    let n = s.len();
    if n < 2 {
        return Verdict::Imperfect;
    }
    // perfect[i][j]: s[i..j] derives from P.
    let mut perfect = vec![vec![false; n + 1]; n + 1];
    for len in (2..=n).step_by(2) {
        for i in 0..=n - len {
            let j = i + len;
            let wrap = table.pairs(s[i], s[j - 1]) && (len == 2 || perfect[i + 1][j - 1]);
            let split = (i + 2..j).step_by(2).any(|k| perfect[i][k] && perfect[k][j]);
            perfect[i][j] = wrap || split;
        }
    }
    if n % 2 == 0 {
        return if perfect[0][n] { Verdict::Perfect } else { Verdict::Imperfect };
    }
    // almost[i][j]: s[i..j] derives from A, with lone bases as seeds.
    let mut almost = vec![vec![false; n + 1]; n + 1];
    for i in 0..n {
        almost[i][i + 1] = true;
    }
    for len in (3..=n).step_by(2) {
        for i in 0..=n - len {
            let j = i + len;
            let wrap = table.pairs(s[i], s[j - 1]) && almost[i + 1][j - 1];
            let split = (i + 1..j).any(|k| {
                (almost[i][k] && perfect[k][j]) || (perfect[i][k] && almost[k][j])
            });
            almost[i][j] = wrap || split;
        }
    }
    if almost[0][n] { Verdict::AlmostPerfect } else { Verdict::Imperfect }
}

fn all_sequences(len: usize) -> impl Iterator<Item = Vec<u8>> {
    (0..4usize.pow(len as u32)).map(move |mut code| {
        (0..len)
            .map(|_| {
                let b = BASES[code % 4];
                code /= 4;
                b
            })
            .collect()
    })
}

fn random_sequence(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| BASES[rng.random_range(0..4)]).collect()
}

fn check(bytes: Vec<u8>, table: &ComplementTable) {
    let expected = reference(&bytes, table);
    let seq = Sequence::try_from(bytes).unwrap();
    assert_eq!(classify(&seq, table, Strategy::Baseline), expected, "baseline on {}", seq);
    assert_eq!(classify(&seq, table, Strategy::Stem), expected, "stem on {}", seq);
}

#[test]
fn exhaustive_short_sequences() {
    let table = ComplementTable::watson_crick();
    for len in 0..=7 {
        for bytes in all_sequences(len) {
            check(bytes, &table);
        }
    }
}

#[test]
fn random_longer_sequences() {
    let table = ComplementTable::watson_crick();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let len = rng.random_range(8..48);
        check(random_sequence(&mut rng, len), &table);
    }
}

#[test]
fn random_perfect_sequences() {
    // Build perfect sequences by construction, so that the positive case
    // is exercised on long inputs as well.
    fn grow(rng: &mut StdRng, depth: usize) -> Vec<u8> {
        let b = BASES[rng.random_range(0..4)];
        let c = u8::from(pr_structure::Base::try_from(b).unwrap().complement());
        match (depth, rng.random_range(0..3)) {
            (0, _) | (_, 0) => vec![b, c],
            (_, 1) => {
                let mut v = vec![b];
                v.extend(grow(rng, depth - 1));
                v.push(c);
                v
            }
            _ => {
                let mut v = grow(rng, depth - 1);
                v.extend(grow(rng, depth - 1));
                v
            }
        }
    }

    let table = ComplementTable::watson_crick();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let bytes = grow(&mut rng, 6);
        let seq = Sequence::try_from(bytes.clone()).unwrap();
        assert_eq!(classify(&seq, &table, Strategy::Baseline), Verdict::Perfect, "{}", seq);
        assert_eq!(classify(&seq, &table, Strategy::Stem), Verdict::Perfect, "{}", seq);

        // One inserted base makes it almost perfect.
        let at = rng.random_range(0..=bytes.len());
        let mut odd = bytes;
        odd.insert(at, BASES[rng.random_range(0..4)]);
        let odd = Sequence::try_from(odd).unwrap();
        assert_eq!(classify(&odd, &table, Strategy::Stem), Verdict::AlmostPerfect, "{}", odd);
    }
}

#[test]
fn stem_families_equal_baseline_ranges() {
    let table = ComplementTable::watson_crick();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let len = rng.random_range(2..40);
        let seq = Sequence::try_from(random_sequence(&mut rng, len)).unwrap();
        let pairing = Pairing::new(&seq, &table);
        let baseline = PerfectClosure::new(pairing);
        let stems = StemClosure::new(pairing);

        let mut family: Vec<Range> = stems.index().to_vec()
            .iter()
            .flat_map(|s| s.ranges().collect::<Vec<_>>())
            .collect();
        family.sort_unstable();
        family.dedup();
        assert_eq!(family, baseline.index().to_vec(), "{}", seq);
        assert!(stems.index().len() <= baseline.index().len());

        let a = AlmostPerfectClosure::new(pairing, baseline.index());
        let b = AlmostPerfectClosure::new(pairing, stems.index());
        assert_eq!(a.index(), b.index(), "{}", seq);
    }
}

#[test]
fn closures_are_deterministic() {
    let table = ComplementTable::watson_crick();
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let len = rng.random_range(2..40);
        let seq = Sequence::try_from(random_sequence(&mut rng, len)).unwrap();
        let pairing = Pairing::new(&seq, &table);
        assert_eq!(PerfectClosure::new(pairing).index(), PerfectClosure::new(pairing).index());
        assert_eq!(StemClosure::new(pairing).index(), StemClosure::new(pairing).index());
    }
}

