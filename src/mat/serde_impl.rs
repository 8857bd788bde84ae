//! Serde implementations for Mat

use serde::{Deserialize, Serialize, Serializer};

use super::Mat;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "Mat")]
#[cfg_attr(test, derive(PartialEq))]
struct SerdeMat {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl From<SerdeMat> for Mat {
    fn from(value: SerdeMat) -> Self {
        Mat::from_row_major(value.nrows, value.ncols, value.data)
    }
}

impl From<&Mat> for SerdeMat {
    fn from(value: &Mat) -> Self {
        SerdeMat {
            nrows: value.nrows(),
            ncols: value.ncols(),
            data: value.as_slice().to_vec(),
        }
    }
}

impl Serialize for Mat {
    fn serialize<S>(&self, s: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        let mat: SerdeMat = self.into();
        mat.serialize(s)
    }
}

impl<'a> Deserialize<'a> for Mat {
    fn deserialize<D>(d: D) -> Result<Self, <D as serde::Deserializer<'a>>::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let mat = SerdeMat::deserialize(d)?;
        if Some(mat.data.len()) != mat.nrows.checked_mul(mat.ncols) {
            return Err(serde::de::Error::custom(
                "serialized matrix is not valid as its data length is not nrows * ncols",
            ));
        }
        Ok(mat.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn mat_to_serde_mat_and_back_again() {
        let mat = Mat::from_fn(3, 4, |i, j| (i + (j * 10)) as f64);
        let serde_mat: SerdeMat = (&mat).into();
        assert_eq!(serde_mat.data.len(), 12);
        let mat_again: Mat = serde_mat.into();
        assert_eq!(mat, mat_again);
    }

    #[test]
    fn serialize_mat() {
        let mat = mat![[1.0, 2.0], [3.0, 4.0]];
        assert_tokens(
            &mat,
            &[
                Token::Struct {
                    name: "Mat",
                    len: 3,
                },
                Token::Str("nrows"),
                Token::U64(2),
                Token::Str("ncols"),
                Token::U64(2),
                Token::Str("data"),
                Token::Seq { len: Some(4) },
                Token::F64(1.0),
                Token::F64(2.0),
                Token::F64(3.0),
                Token::F64(4.0),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn deserialize_bad_length() {
        assert_de_tokens_error::<Mat>(
            &[
                Token::Struct {
                    name: "Mat",
                    len: 3,
                },
                Token::Str("nrows"),
                Token::U64(2),
                Token::Str("ncols"),
                Token::U64(2),
                Token::Str("data"),
                Token::Seq { len: Some(3) },
                Token::F64(1.0),
                Token::F64(2.0),
                Token::F64(3.0),
                Token::SeqEnd,
                Token::StructEnd,
            ],
            "serialized matrix is not valid as its data length is not nrows * ncols",
        );
    }
}
