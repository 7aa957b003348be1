use ndarray::Array2;

/// Number of features per record: three color channels and one auxiliary value.
pub const N_FEATURES: usize = 4;

/// One line of cube data: a sticker color plus an auxiliary scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub aux: f32,
}

impl Record {
    pub fn new(r: f32, g: f32, b: f32, aux: f32) -> Self {
        Self { r, g, b, aux }
    }

    /// Feature vector in the order the model clusters on: `r, g, b, aux`.
    #[inline]
    pub fn features(&self) -> [f32; N_FEATURES] {
        [self.r, self.g, self.b, self.aux]
    }
}

impl From<[f32; N_FEATURES]> for Record {
    fn from([r, g, b, aux]: [f32; N_FEATURES]) -> Self {
        Self { r, g, b, aux }
    }
}

/// Stack the feature vectors of `records` into an `(n, 4)` matrix, one row per
/// record in input order.
pub fn assemble(records: &[Record]) -> Array2<f32> {
    let mut data = Array2::zeros((records.len(), N_FEATURES));
    for (mut row, record) in data.outer_iter_mut().zip(records) {
        for (dst, src) in row.iter_mut().zip(record.features()) {
            *dst = src;
        }
    }
    data
}
