//! Model-based tests: drive `InlineVec` and `Vec` with the same random
//! operation sequences and require identical observable state throughout.

use proptest::prelude::*;

use trellis::{Edit, InlineVec, Sequence};

const CAP: usize = 16;

/// One random mutation. Positions and spans are percentages of the current
/// length so every generated operation can be made valid.
#[derive(Clone, Debug)]
enum Op {
    Push(u32),
    Pop,
    Insert { pos_pct: f64, value: u32 },
    Erase { pos_pct: f64 },
    EraseSpan { pos_pct: f64, len_pct: f64 },
    Truncate { len_pct: f64 },
    Resize { len_pct: f64, value: u32 },
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    return prop_oneof![
        any::<u32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0.0..=1.0f64, any::<u32>())
            .prop_map(|(pos_pct, value)| Op::Insert { pos_pct, value }),
        (0.0..=1.0f64).prop_map(|pos_pct| Op::Erase { pos_pct }),
        (0.0..=1.0f64, 0.0..=1.0f64)
            .prop_map(|(pos_pct, len_pct)| Op::EraseSpan { pos_pct, len_pct }),
        (0.0..=1.0f64).prop_map(|len_pct| Op::Truncate { len_pct }),
        (0.0..=1.0f64, any::<u32>())
            .prop_map(|(len_pct, value)| Op::Resize { len_pct, value }),
    ];
}

fn scaled(pct: f64, len: usize) -> usize {
    return ((pct * len as f64) as usize).min(len);
}

/// Apply `op` to both containers, skipping it when it would violate the
/// fixed capacity or an emptiness precondition.
fn apply(op: &Op, v: &mut InlineVec<u32, CAP>, model: &mut Vec<u32>) {
    let len = model.len();
    match op {
        Op::Push(value) => {
            if len < CAP {
                v.push(*value);
                model.push(*value);
            }
        }
        Op::Pop => {
            if len > 0 {
                Edit::pop(v);
                model.pop();
            }
        }
        Op::Insert { pos_pct, value } => {
            if len < CAP {
                let at = scaled(*pos_pct, len);
                v.emplace(at, *value);
                model.insert(at, *value);
            }
        }
        Op::Erase { pos_pct } => {
            if len > 0 {
                let at = scaled(*pos_pct, len - 1);
                v.erase(at);
                model.remove(at);
            }
        }
        Op::EraseSpan { pos_pct, len_pct } => {
            let start = scaled(*pos_pct, len);
            let count = scaled(*len_pct, len - start);
            v.erase_span(start..start + count);
            model.drain(start..start + count);
        }
        Op::Truncate { len_pct } => {
            let keep = scaled(*len_pct, len);
            Edit::truncate(v, keep);
            model.truncate(keep);
        }
        Op::Resize { len_pct, value } => {
            let target = scaled(*len_pct, CAP);
            v.resize(target, *value);
            model.resize(target, *value);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After every operation the worked container matches the model exactly.
    #[test]
    fn tracks_vec_through_random_edits(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let mut v: InlineVec<u32, CAP> = InlineVec::new();
        let mut model: Vec<u32> = Vec::new();

        for op in &ops {
            apply(op, &mut v, &mut model);

            prop_assert_eq!(v.len(), model.len());
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert_eq!(v.is_empty(), model.is_empty());
            prop_assert!(v.eq_elems(&model));

            let forward: Vec<u32> = v.iter().copied().collect();
            prop_assert_eq!(&forward, &model);

            let mut backward: Vec<u32> = v.rev_iter().copied().collect();
            backward.reverse();
            prop_assert_eq!(&backward, &model);

            for at in 0..model.len() {
                prop_assert_eq!(Sequence::get(&v, at), model.get(at));
            }
            prop_assert_eq!(Sequence::get(&v, model.len()), None);
            prop_assert_eq!(v.first(), model.first());
            prop_assert_eq!(Sequence::last(&v), model.last());
        }
    }

    /// Collecting and extending respect order and capacity.
    #[test]
    fn collect_matches_model(values in prop::collection::vec(any::<u32>(), 0..CAP)) {
        let v: InlineVec<u32, CAP> = values.iter().copied().collect();
        prop_assert_eq!(v.as_slice(), values.as_slice());

        let mut extended: InlineVec<u32, CAP> = InlineVec::new();
        extended.extend(values.iter().copied());
        prop_assert_eq!(extended.as_slice(), values.as_slice());
    }
}
