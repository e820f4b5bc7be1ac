use super::traits::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use slist::SinglyLinkedList;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOperation {
    PushFront(u32),
    Front,
    Len,
    /// cursor walk from `begin()` to `end()`
    Traverse,
    /// copy the list, push onto the original, report the copy
    CloneThenPush(u32),
    /// `clone_from` a snapshot of itself
    AssignFromClone,
    IncrementAll,
    Clear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unit,
    Front(Option<u32>),
    Len(usize),
    Items(Vec<u32>),
}

fn walk(list: &SinglyLinkedList<u32>) -> Vec<u32> {
    let mut items = Vec::new();
    let mut it = list.begin();
    while it != list.end() {
        items.push(*it);
        it.move_next();
    }
    items
}

impl Operation for ListOperation {
    type Result = Outcome;
    type Target = SinglyLinkedList<u32>;

    fn apply(&self, list: &mut Self::Target) -> Outcome {
        match *self {
            Self::PushFront(v) => {
                list.push_front(v);
                Outcome::Unit
            }
            Self::Front => Outcome::Front(list.front().copied()),
            Self::Len => Outcome::Len(list.len()),
            Self::Traverse => Outcome::Items(walk(list)),
            Self::CloneThenPush(v) => {
                let copy = list.clone();
                list.push_front(v);
                Outcome::Items(walk(&copy))
            }
            Self::AssignFromClone => {
                let snapshot = list.clone();
                list.clone_from(&snapshot);
                Outcome::Unit
            }
            Self::IncrementAll => {
                let mut it = list.begin_mut();
                while !it.is_end() {
                    let v = it.post_increment();
                    *v = v.wrapping_add(1);
                }
                Outcome::Unit
            }
            Self::Clear => {
                list.clear();
                Outcome::Unit
            }
        }
    }
}

impl<R: Rng + SeedableRng> OperationGen<R> for ListOperation {
    type Generator = ListOperationGenerator<R>;
}

/// Produces list operations together with the outcome a `VecDeque` model gives for them.
pub struct ListOperationGenerator<R = StdRng>
where
    R: Rng + SeedableRng,
{
    rng: R,
    data: VecDeque<u32>,
}

impl<R> OperationGenerator<R> for ListOperationGenerator<R>
where
    R: Rng + SeedableRng,
{
    type Operation = ListOperation;
    type ReferenceImpl = VecDeque<u32>;
    fn from_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
            data: VecDeque::new(),
        }
    }
    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl<R> Iterator for ListOperationGenerator<R>
where
    R: Rng + SeedableRng,
{
    type Item = (ListOperation, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        // weighted so lists actually grow between the rare clears
        let item = match self.rng.gen_range(0..100) {
            0..=39 => {
                let v: u32 = self.rng.gen();
                self.data.push_front(v);
                (ListOperation::PushFront(v), Outcome::Unit)
            }
            40..=49 => (
                ListOperation::Front,
                Outcome::Front(self.data.front().copied()),
            ),
            50..=59 => (ListOperation::Len, Outcome::Len(self.data.len())),
            60..=69 => (
                ListOperation::Traverse,
                Outcome::Items(self.data.iter().copied().collect()),
            ),
            70..=81 => {
                let v: u32 = self.rng.gen();
                let copy = self.data.iter().copied().collect();
                self.data.push_front(v);
                (ListOperation::CloneThenPush(v), Outcome::Items(copy))
            }
            82..=87 => (ListOperation::AssignFromClone, Outcome::Unit),
            88..=97 => {
                for v in self.data.iter_mut() {
                    *v = v.wrapping_add(1);
                }
                (ListOperation::IncrementAll, Outcome::Unit)
            }
            98..=99 => {
                self.data.clear();
                (ListOperation::Clear, Outcome::Unit)
            }
            _ => unreachable!(),
        };
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic() {
        let a: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(7).take(200).collect();
        let b: Vec<_> = ListOperationGenerator::<StdRng>::from_seed(7).take(200).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn operations_match_model() {
        let mut list = SinglyLinkedList::new();
        for (op, expected) in ListOperationGenerator::<StdRng>::from_seed(11).take(2_000) {
            assert_eq!(op.apply(&mut list), expected, "operation {op:?}");
        }
    }

    #[test]
    fn clone_then_push_reports_copy() {
        let mut list: SinglyLinkedList<u32> = (1..4).collect();
        let out = ListOperation::CloneThenPush(9).apply(&mut list);
        assert_eq!(out, Outcome::Items(vec![3, 2, 1]));
        assert_eq!(ListOperation::Front.apply(&mut list), Outcome::Front(Some(9)));
    }

    #[test]
    fn increment_all_wraps() {
        let mut list = SinglyLinkedList::new();
        list.push_front(u32::MAX);
        ListOperation::IncrementAll.apply(&mut list);
        assert_eq!(list.front(), Some(&0));
    }
}
