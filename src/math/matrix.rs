use rand::Rng;
use std::ops::AddAssign;

/// Dense row-major matrix backed by a single flat buffer.
///
/// The shape is fixed at construction; every operation here mutates in place
/// or borrows, so a matrix is never reallocated after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Independent draws from the uniform distribution over [0, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for x in res.data.iter_mut() {
            *x = rng.gen::<f64>();
        }
        res
    }

    /// Builds a matrix from nested rows. Returns `None` if the rows are ragged
    /// or there are none.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Matrix> {
        let cols = rows.first()?.len();
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Matrix {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        for (x, d) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x += d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_entries_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 3, &mut rng);
        assert_eq!(m.data.len(), 12);
        assert!(m.data.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn rows_are_addressed_by_offset() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.rows_iter().count(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Matrix::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_none());
        assert!(Matrix::from_rows(vec![]).is_none());
    }

    #[test]
    fn add_assign_is_elementwise() {
        let mut a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.5, -2.0]]).unwrap();
        a += &b;
        assert_eq!(a.data, vec![1.5, 0.0]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn add_assign_panics_on_shape_mismatch() {
        let mut a = Matrix::zeros(1, 2);
        a += &Matrix::zeros(2, 1);
    }
}
