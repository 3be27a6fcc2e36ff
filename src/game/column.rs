use std::fmt;
use std::num::NonZeroU32;

/// Number of columns in a puzzle.
pub const COLUMN_COUNT: usize = 3;

/// A disk, identified only by its size. Sizes start at 1, so an empty
/// column can never be confused with a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(NonZeroU32);

impl Disk {
    /// Create a disk of the given size, or `None` for size 0.
    pub fn new(size: u32) -> Option<Disk> {
        NonZeroU32::new(size).map(Disk)
    }

    pub fn size(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A LIFO stack of disks, stored bottom first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    disks: Vec<Disk>,
}

impl Column {
    /// Create an empty column
    pub fn new() -> Self {
        Column { disks: Vec::new() }
    }

    /// Create a full tower of `degree` disks, largest at the bottom
    pub fn tower(degree: u32) -> Self {
        Column {
            disks: (1..=degree).rev().filter_map(Disk::new).collect(),
        }
    }

    /// Top disk, or `None` if the column is empty
    pub fn peek(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Disk at `height` above the floor (0 is the bottom disk)
    pub fn get(&self, height: usize) -> Option<Disk> {
        self.disks.get(height).copied()
    }

    /// True if sizes strictly decrease from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}

impl FromIterator<Disk> for Column {
    fn from_iter<I: IntoIterator<Item = Disk>>(iter: I) -> Self {
        Column {
            disks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(size: u32) -> Disk {
        Disk::new(size).unwrap()
    }

    #[test]
    fn test_zero_is_not_a_disk() {
        assert_eq!(Disk::new(0), None);
        assert_eq!(Disk::new(4).map(Disk::size), Some(4));
    }

    #[test]
    fn test_new_column_is_empty() {
        let column = Column::new();
        assert!(column.is_empty());
        assert_eq!(column.peek(), None);
    }

    #[test]
    fn test_tower_is_largest_at_bottom() {
        let column = Column::tower(4);
        assert_eq!(column.len(), 4);
        assert_eq!(column.get(0), Some(disk(4)));
        assert_eq!(column.peek(), Some(disk(1)));
        assert!(column.is_ordered());
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut column = Column::new();
        column.push(disk(3));
        column.push(disk(2));
        assert_eq!(column.pop(), Some(disk(2)));
        assert_eq!(column.peek(), Some(disk(3)));
        assert_eq!(column.pop(), Some(disk(3)));
        assert_eq!(column.pop(), None);
    }

    #[test]
    fn test_unordered_column_detected() {
        let column: Column = [disk(1), disk(2)].into_iter().collect();
        assert!(!column.is_ordered());
    }
}
