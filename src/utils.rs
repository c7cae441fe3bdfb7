//! general utilities that help to handle spectrum data

use crate::error::{Error, Result};

/// seperates a 1 dimensional interleaved buffer into one vector per channel
///
/// the length of `data` has to be a multiple of `channel_count`
pub fn separate_channels(data: &[f32], channel_count: usize) -> Result<Vec<Vec<f32>>> {
    if channel_count == 0 || data.len() % channel_count != 0 {
        return Err(Error::Interleaving {
            len: data.len(),
            channel_count,
        });
    }

    let mut buffer: Vec<Vec<f32>> = vec![Vec::with_capacity(data.len() / channel_count); channel_count];
    for chunked_data in data.chunks(channel_count) {
        for (i, v) in chunked_data.iter().enumerate() {
            buffer[i].push(*v);
        }
    }

    Ok(buffer)
}
