use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LightboxError {
    #[error("lightbox needs at least one item")]
    Empty,
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Full-screen viewer over a fixed, non-empty list with wraparound stepping.
///
/// Stepping only moves the index while open; a closed lightbox keeps the
/// index it was closed at until the next [`Lightbox::open`].
#[derive(Debug, Clone)]
pub struct Lightbox<'a, T> {
    items: &'a [T],
    index: usize,
    open: bool,
}

impl<'a, T> Lightbox<'a, T> {
    pub fn new(items: &'a [T]) -> Result<Self, LightboxError> {
        if items.is_empty() {
            return Err(LightboxError::Empty);
        }
        Ok(Self {
            items,
            index: 0,
            open: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The displayed item, or `None` while closed.
    pub fn current(&self) -> Option<&'a T> {
        if self.open {
            self.items.get(self.index)
        } else {
            None
        }
    }

    pub fn open(&mut self, index: usize) -> Result<&'a T, LightboxError> {
        let item = self.items.get(index).ok_or(LightboxError::OutOfRange {
            index,
            len: self.items.len(),
        })?;
        self.index = index;
        self.open = true;
        Ok(item)
    }

    /// Step forward with wraparound. No-op while closed.
    pub fn next(&mut self) -> Option<&'a T> {
        if self.open {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    pub fn previous(&mut self) -> Option<&'a T> {
        if self.open {
            let len = self.items.len();
            self.index = (self.index + len - 1) % len;
        }
        self.current()
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_list_rejected() {
        let items: [u8; 0] = [];
        assert_eq!(Lightbox::new(&items).err(), Some(LightboxError::Empty));
    }

    #[test]
    fn three_image_walkthrough() {
        let images = ["portrait", "artistic", "automotive"];
        let mut lb = Lightbox::new(&images).expect("non-empty");
        assert_eq!(lb.open(0), Ok(&"portrait"));
        assert_eq!(lb.next(), Some(&"artistic"));
        assert_eq!(lb.index(), 1);
        lb.next();
        assert_eq!(lb.index(), 2);
        assert_eq!(lb.next(), Some(&"portrait"));
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn previous_wraps_from_zero() {
        let images = [10, 20, 30];
        let mut lb = Lightbox::new(&images).expect("non-empty");
        lb.open(0).expect("in range");
        assert_eq!(lb.previous(), Some(&30));
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn open_out_of_range() {
        let images = [1, 2, 3];
        let mut lb = Lightbox::new(&images).expect("non-empty");
        assert_eq!(
            lb.open(3),
            Err(LightboxError::OutOfRange { index: 3, len: 3 })
        );
        assert!(!lb.is_open());
    }

    #[test]
    fn close_hides_selection() {
        let images = [1, 2];
        let mut lb = Lightbox::new(&images).expect("non-empty");
        lb.open(1).expect("in range");
        lb.close();
        assert!(lb.current().is_none());
        assert!(lb.next().is_none());
        assert_eq!(lb.index(), 1);
        assert_eq!(lb.open(0), Ok(&1));
    }

    #[test]
    fn single_item_steps_to_itself() {
        let images = ["only"];
        let mut lb = Lightbox::new(&images).expect("non-empty");
        lb.open(0).expect("in range");
        assert_eq!(lb.next(), Some(&"only"));
        assert_eq!(lb.previous(), Some(&"only"));
    }

    proptest! {
        #[test]
        fn next_cycles_back(n in 1usize..64, start in 0usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let start = start % n;
            let mut lb = Lightbox::new(&items).expect("non-empty");
            lb.open(start).expect("in range");
            for _ in 0..n {
                lb.next();
            }
            prop_assert_eq!(lb.index(), start);
        }

        #[test]
        fn previous_cycles_back(n in 1usize..64, start in 0usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let start = start % n;
            let mut lb = Lightbox::new(&items).expect("non-empty");
            lb.open(start).expect("in range");
            for _ in 0..n {
                lb.previous();
            }
            prop_assert_eq!(lb.index(), start);
        }

        #[test]
        fn next_and_previous_are_inverse(n in 1usize..64, start in 0usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let start = start % n;
            let mut lb = Lightbox::new(&items).expect("non-empty");
            lb.open(start).expect("in range");
            lb.next();
            lb.previous();
            prop_assert_eq!(lb.index(), start);
            lb.previous();
            lb.next();
            prop_assert_eq!(lb.index(), start);
        }
    }
}
