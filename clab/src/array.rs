use std::ops;

use crate::dims::Dims;

/// Row-major 2D array backed by one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn new(item: T, width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("Array size overflow: {}x{}", width, height));

        Self {
            buf: vec![item; len],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut arr = Array2D::new(0u8, 3, 2);
        arr[Dims(2, 1)] = 7;

        assert_eq!(arr.dim_to_idx(Dims(2, 1)), Some(5));
        assert_eq!(arr.idx_to_dim(5), Some(Dims(2, 1)));
        assert_eq!(arr.rows().nth(1), Some(&[0, 0, 7][..]));
    }

    #[test]
    fn out_of_bounds_get() {
        let arr = Array2D::new(false, 5, 5);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(5, 0)), None);
        assert_eq!(arr.get(Dims(0, 5)), None);
        assert_eq!(arr.get(Dims(4, 4)), Some(&false));
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn out_of_bounds_index_panics() {
        let arr = Array2D::new(0, 5, 5);
        let _ = arr[Dims(5, 5)];
    }

    #[test]
    #[should_panic(expected = "Array size overflow")]
    fn overflowing_size_panics() {
        let _ = Array2D::new(0u8, usize::MAX, 2);
    }
}
