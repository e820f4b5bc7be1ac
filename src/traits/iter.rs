pub trait Iterable {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item> + 'a
    where
        Self: 'a;
    fn iter<'a>(&'a self) -> Self::Iter<'a>;
}

pub trait IterableMut {
    type Item;
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item> + 'a
    where
        Self: 'a;
    fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a>;
}

mod impls {
    use super::*;
    use crate::linked_lists::singly_linked_list::{Iter, IterMut};
    use crate::SinglyLinkedList;
    use alloc::vec::Vec;

    impl<T> Iterable for Vec<T> {
        type Item = T;
        type Iter<'a> = core::slice::Iter<'a, T> where T: 'a;
        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            self.as_slice().iter()
        }
    }

    impl<T> IterableMut for Vec<T> {
        type Item = T;
        type IterMut<'a> = core::slice::IterMut<'a, T> where T: 'a;
        fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a> {
            self.as_mut_slice().iter_mut()
        }
    }

    impl<T> Iterable for SinglyLinkedList<T> {
        type Item = T;
        type Iter<'a> = Iter<'a, T> where T: 'a;
        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            SinglyLinkedList::iter(self)
        }
    }

    impl<T> IterableMut for SinglyLinkedList<T> {
        type Item = T;
        type IterMut<'a> = IterMut<'a, T> where T: 'a;
        fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a> {
            SinglyLinkedList::iter_mut(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinglyLinkedList;

    fn sum_all<C: Iterable<Item = u32>>(c: &C) -> u32 {
        c.iter().sum()
    }

    fn bump_all<C: IterableMut<Item = u32>>(c: &mut C) {
        for x in c.iter_mut() {
            *x += 1;
        }
    }

    #[test]
    fn list_and_vec_agree() {
        let mut v: Vec<u32> = (0..10).collect();
        let mut lst: SinglyLinkedList<u32> = (0..10).collect();
        bump_all(&mut v);
        bump_all(&mut lst);
        assert_eq!(sum_all(&v), sum_all(&lst));
    }
}
