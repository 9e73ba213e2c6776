use nalgebra::{DMatrix, DVector};

/// Simplex vertices stored as columns, ordered by ascending value.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Simplex {
    vertices: DMatrix<f64>,
    values: DVector<f64>,
}

impl Simplex {
    /// Builds an ordered simplex from `n + 1` points of dimension `n`.
    pub(super) fn new(points: Vec<DVector<f64>>, values: Vec<f64>) -> Self {
        let n = points.len() - 1;
        let mut simplex = Self {
            vertices: DMatrix::from_fn(n, n + 1, |r, c| points[c][r]),
            values: DVector::from_vec(values),
        };
        simplex.sort();
        simplex
    }

    /// Returns the dimension `n` of the vertices.
    pub(super) fn dim(&self) -> usize {
        self.vertices.nrows()
    }

    pub(super) fn point(&self, i: usize) -> DVector<f64> {
        self.vertices.column(i).clone_owned()
    }

    pub(super) fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub(super) fn vertices(&self) -> &DMatrix<f64> {
        &self.vertices
    }

    pub(super) fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Centroid of every vertex except the worst.
    pub(super) fn centroid(&self) -> DVector<f64> {
        let n = self.dim();
        self.vertices.columns(0, n).column_mean()
    }

    pub(super) fn replace_worst(&mut self, x: DVector<f64>, f: f64) {
        let n = self.dim();
        self.vertices.set_column(n, &x);
        self.values[n] = f;
        self.sort();
    }

    /// Moves every vertex but the best toward the best by `sigma`.
    pub(super) fn shrink_toward_best<F>(&mut self, sigma: f64, mut eval: F)
    where
        F: FnMut(&DVector<f64>) -> (DVector<f64>, f64),
    {
        let best = self.point(0);
        for i in 1..=self.dim() {
            let target = &best + (self.point(i) - &best) * sigma;
            let (x, f) = eval(&target);
            self.vertices.set_column(i, &x);
            self.values[i] = f;
        }
        self.sort();
    }

    /// Largest coordinate distance from the best vertex to any other.
    pub(super) fn diameter(&self) -> f64 {
        let best = self.vertices.column(0);
        (1..=self.dim())
            .map(|i| (self.vertices.column(i) - best).amax())
            .fold(0.0, f64::max)
    }

    /// Difference between the worst and best values.
    pub(super) fn spread(&self) -> f64 {
        self.values[self.dim()] - self.values[0]
    }

    fn sort(&mut self) {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        order.sort_by(|&a, &b| self.values[a].total_cmp(&self.values[b]));

        let vertices = &self.vertices;
        let values = &self.values;
        let sorted_vertices = DMatrix::from_fn(vertices.nrows(), vertices.ncols(), |r, c| {
            vertices[(r, order[c])]
        });
        let sorted_values = DVector::from_fn(values.len(), |i, _| values[order[i]]);

        self.vertices = sorted_vertices;
        self.values = sorted_values;
    }
}
