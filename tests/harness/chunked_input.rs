use rand::{thread_rng, Rng};
use std::env;

/// Input split into chunks of a random size, or of `CHUNK_SIZE` bytes if the
/// environment variable is set.
#[derive(Debug, Clone)]
pub struct ChunkedInput {
    input: Vec<u8>,
    chunk_size: usize,
}

impl From<&str> for ChunkedInput {
    fn from(input: &str) -> Self {
        let input = input.as_bytes().to_vec();
        let len = input.len();

        let chunk_size = match env::var("CHUNK_SIZE") {
            Ok(val) => val.parse().unwrap(),
            Err(_) => {
                if len > 1 {
                    thread_rng().gen_range(1..len)
                } else {
                    len.max(1)
                }
            }
        };

        ChunkedInput { input, chunk_size }
    }
}

impl ChunkedInput {
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunks(&self) -> Vec<&[u8]> {
        self.input.chunks(self.chunk_size).collect()
    }

    /// Every way of splitting the input in two.
    pub fn splits(&self) -> impl Iterator<Item = [&[u8]; 2]> {
        (0..=self.input.len()).map(|pos| {
            let (left, right) = self.input.split_at(pos);

            [left, right]
        })
    }

    /// The input fed one byte at a time.
    pub fn bytes(&self) -> Vec<&[u8]> {
        self.input.chunks(1).collect()
    }
}
