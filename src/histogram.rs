use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of exact pixel values, remembering the order each value was first seen in.
///
/// Every channel takes part in a pixel's identity, so two RGBA pixels that differ only in alpha
/// are counted separately.
#[derive(Debug)]
pub struct Histogram<P> {
    counts: Vec<(P, u32)>,
}

/// What a histogram says about its most frequent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally<P> {
    /// No pixels were counted.
    Empty,
    /// Exactly one value has the highest count.
    Dominant(P),
    /// Several values share the highest count; `first` is the earliest seen of them.
    Tied { first: P, contenders: usize },
}

impl<P> Histogram<P>
where
    P: Copy + Eq + Hash,
{
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        let mut counts: Vec<(P, u32)> = Vec::new();
        let mut index = HashMap::new();

        for pixel in pixels {
            let slot = *index.entry(pixel).or_insert_with(|| {
                counts.push((pixel, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        Self { counts }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> Option<u32> {
        self.counts.iter().map(|&(_, count)| count).max()
    }

    /// Values that reach the highest count, in first-seen order.
    pub fn leaders(&self) -> impl Iterator<Item = P> + '_ {
        let max = self.max_count().unwrap_or(0);
        self.counts
            .iter()
            .filter(move |&&(_, count)| count == max)
            .map(|&(pixel, _)| pixel)
    }

    pub fn tally(&self) -> Tally<P> {
        let mut leaders = self.leaders();

        match leaders.next() {
            None => Tally::Empty,
            Some(first) => match leaders.count() {
                0 => Tally::Dominant(first),
                others => Tally::Tied {
                    first,
                    contenders: others + 1,
                },
            },
        }
    }
}
