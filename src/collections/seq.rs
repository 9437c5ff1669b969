//! Functional-style operations over ordered sequences.
//!
//! [`Seq`] is implemented for `[T]`, so anything that derefs to a slice
//! (`Vec<T>`, `Box<[T]>`, `&[T]`) picks the methods up once the trait is in
//! scope. Fixed-size arrays have an inherent `map`; call `.as_slice()` or go
//! through a `Vec` when that one is not what you want.

use core::ops::Index;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use tracing::trace;

pub trait Seq: Index<usize> {
    type Item;

    fn map<U>(&self, f: impl FnMut(&Self::Item) -> U) -> Vec<U>;

    /// Left-to-right fold starting from `init`.
    fn reduce<A>(&self, init: A, f: impl FnMut(A, &Self::Item) -> A) -> A;

    fn filter(&self, f: impl FnMut(&Self::Item) -> bool) -> Vec<Self::Item>
    where
        Self::Item: Clone;

    fn some(&self, f: impl FnMut(&Self::Item) -> bool) -> bool;

    /// `true` for an empty sequence.
    fn every(&self, f: impl FnMut(&Self::Item) -> bool) -> bool;

    fn find(&self, f: impl FnMut(&Self::Item) -> bool) -> Option<&Self::Item>;
    fn find_index(&self, f: impl FnMut(&Self::Item) -> bool) -> Option<usize>;
    fn find_last(&self, f: impl FnMut(&Self::Item) -> bool) -> Option<&Self::Item>;
    fn find_last_index(&self, f: impl FnMut(&Self::Item) -> bool) -> Option<usize>;
    fn count_where(&self, f: impl FnMut(&Self::Item) -> bool) -> usize;

    /// Calls `f` on every element, one at a time, in index order.
    fn for_each(&self, f: impl FnMut(&Self::Item));

    fn includes(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;
    fn index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;
    fn last_index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// Concatenates the inner sequences.
    fn flat<U>(&self) -> Vec<U>
    where
        Self::Item: AsRef<[U]>,
        U: Clone;

    /// Same result as `map` followed by `flat`, without building the nested
    /// sequence.
    fn flat_map<I>(&self, f: impl FnMut(&Self::Item) -> I) -> Vec<I::Item>
    where
        I: IntoIterator;

    /// Returns a reversed copy. The sequence itself is left untouched.
    fn reversed(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone;

    /// Reverses the caller's storage and hands it back.
    fn reverse_in_place(&mut self) -> &mut [Self::Item];

    /// Keeps the first occurrence of every distinct value.
    fn unique(&self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone;

    /// Splits into consecutive sub-slices of `size` elements; the last one may
    /// be shorter. A `size` of zero yields no chunks at all.
    fn chunk(&self, size: usize) -> Vec<&[Self::Item]>;

    /// [`Seq::chunk`] for a signed size. Any `size <= 0` yields no chunks.
    fn chunk_signed(&self, size: isize) -> Vec<&[Self::Item]>;

    /// Drops every element whose value appears in `exclusion`.
    fn remove_values(&self, exclusion: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone;
}

impl<T> Seq for [T] {
    type Item = T;

    #[inline]
    fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Vec<U> {
        let mut result = Vec::with_capacity(self.len());
        for i in self {
            result.push(f(i));
        }
        result
    }

    #[inline]
    fn reduce<A>(&self, init: A, mut f: impl FnMut(A, &T) -> A) -> A {
        let mut acc = init;
        for i in self {
            acc = f(acc, i);
        }
        acc
    }

    #[inline]
    #[inline]
    fn filter(&self, mut f: impl FnMut(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::new();
        for i in self {
            if f(i) {
                result.push(i.clone());
            }
        }
        result
    }

    #[inline]
    fn some(&self, mut f: impl FnMut(&T) -> bool) -> bool {
        for i in self {
            if f(i) {
                return true;
            }
        }
        false
    }

    #[inline]
    fn every(&self, mut f: impl FnMut(&T) -> bool) -> bool {
        for i in self {
            if !f(i) {
                return false;
            }
        }
        true
    }

    #[inline]
    fn find(&self, mut f: impl FnMut(&T) -> bool) -> Option<&T> {
        for i in self {
            if f(i) {
                return Some(i);
            }
        }
        None
    }

    #[inline]
    fn find_index(&self, mut f: impl FnMut(&T) -> bool) -> Option<usize> {
        for (pos, i) in self.iter().enumerate() {
            if f(i) {
                return Some(pos);
            }
        }
        None
    }

    #[inline]
    fn find_last(&self, mut f: impl FnMut(&T) -> bool) -> Option<&T> {
        for i in self.iter().rev() {
            if f(i) {
                return Some(i);
            }
        }
        None
    }

    #[inline]
    fn find_last_index(&self, mut f: impl FnMut(&T) -> bool) -> Option<usize> {
        for (pos, i) in self.iter().enumerate().rev() {
            if f(i) {
                return Some(pos);
            }
        }
        None
    }

    #[inline]
    fn count_where(&self, mut f: impl FnMut(&T) -> bool) -> usize {
        let mut c = 0;
        for i in self {
            if f(i) {
                c += 1;
            }
        }
        c
    }

    #[inline]
    fn for_each(&self, mut f: impl FnMut(&T)) {
        for i in self {
            f(i);
        }
    }

    #[inline]
    fn includes(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }

    #[inline]
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_index(|i| i == item)
    }

    #[inline]
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_last_index(|i| i == item)
    }

    #[inline]
    fn flat<U>(&self) -> Vec<U>
    where
        T: AsRef<[U]>,
        U: Clone,
    {
        let len = self.iter().map(|s| s.as_ref().len()).sum();
        let mut result = Vec::with_capacity(len);
        for s in self {
            result.extend_from_slice(s.as_ref());
        }
        result
    }

    #[inline]
    fn flat_map<I>(&self, mut f: impl FnMut(&T) -> I) -> Vec<I::Item>
    where
        I: IntoIterator,
    {
        let mut result = Vec::new();
        for i in self {
            result.extend(f(i));
        }
        result
    }

    #[inline]
    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.len());
        for i in self.iter().rev() {
            result.push(i.clone());
        }
        result
    }

    #[inline]
    fn reverse_in_place(&mut self) -> &mut [T] {
        self.reverse();
        self
    }

    #[inline]
    fn unique(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        for i in self {
            if seen.insert(i) {
                result.push(i.clone());
            }
        }
        result
    }

    #[inline]
    fn chunk(&self, size: usize) -> Vec<&[T]> {
        if size == 0 {
            trace!(len = self.len(), "chunk size is zero, no chunks produced");
            return vec![];
        }
        self.chunks(size).collect()
    }

    #[inline]
    fn chunk_signed(&self, size: isize) -> Vec<&[T]> {
        if size <= 0 {
            trace!(size, "non-positive chunk size, no chunks produced");
            return vec![];
        }
        self.chunk(size as usize)
    }

    #[inline]
    fn remove_values(&self, exclusion: &[T]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        if self.is_empty() {
            return vec![];
        }
        let excluded: FxHashSet<&T> = exclusion.iter().collect();
        let mut result = Vec::with_capacity(self.len().saturating_sub(exclusion.len()));
        for i in self {
            if !excluded.contains(i) {
                result.push(i.clone());
            }
        }
        result
    }
}
