//! Byte-offset bookkeeping for text transformations.
//!
//! Every rewrite the formatter applies (percent-unescaping, IDN decoding,
//! component elision) records an [`Adjustment`] describing how a span of the
//! source text changed length. Walking the accumulated list converts a cursor
//! position in the source string into the matching position in the output.
//! All offsets are byte offsets into UTF-8 strings.

/// A single text transformation: at `original_offset` in the source,
/// `original_length` bytes became `output_length` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub original_offset: usize,
    pub original_length: usize,
    pub output_length: usize,
}

impl Adjustment {
    pub fn new(original_offset: usize, original_length: usize, output_length: usize) -> Self {
        Self {
            original_offset,
            original_length,
            output_length,
        }
    }
}

/// Map `offset` in the original text to the transformed output.
///
/// `adjustments` must be in ascending `original_offset` order with
/// non-overlapping original spans. An offset inside a transformed span clamps
/// to the span's start in the output; every result clamps to `output_len`.
/// An empty list is the identity mapping.
pub fn adjust_offset(adjustments: &[Adjustment], offset: usize, output_len: usize) -> usize {
    let mut delta = 0isize;
    for adjustment in adjustments {
        if offset <= adjustment.original_offset {
            break;
        }
        if offset < adjustment.original_offset + adjustment.original_length {
            // Inside a transformed span: clamp to where the span begins in
            // the output.
            let begin = adjustment.original_offset as isize + delta;
            return usize::try_from(begin).unwrap_or(0).min(output_len);
        }
        delta += adjustment.output_length as isize - adjustment.original_length as isize;
    }
    usize::try_from(offset as isize + delta)
        .unwrap_or(0)
        .min(output_len)
}

/// Map a batch of offsets with a single pass over the adjustment list.
pub fn adjust_offsets(adjustments: &[Adjustment], offsets: &[usize], output_len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..offsets.len()).collect();
    order.sort_unstable_by_key(|&i| offsets[i]);

    let mut results = vec![0usize; offsets.len()];
    let mut delta = 0isize;
    let mut next = 0;
    for &i in &order {
        let offset = offsets[i];
        while next < adjustments.len() {
            let adjustment = &adjustments[next];
            if offset <= adjustment.original_offset
                || offset < adjustment.original_offset + adjustment.original_length
            {
                break;
            }
            delta += adjustment.output_length as isize - adjustment.original_length as isize;
            next += 1;
        }
        let mapped = match adjustments.get(next) {
            Some(adjustment)
                if offset > adjustment.original_offset
                    && offset < adjustment.original_offset + adjustment.original_length =>
            {
                adjustment.original_offset as isize + delta
            }
            _ => offset as isize + delta,
        };
        results[i] = usize::try_from(mapped).unwrap_or(0).min(output_len);
    }
    results
}

/// Rebase `second`, which was recorded against the text `first` already
/// transformed, into the coordinates of the text `first` started from, then
/// splice both lists into one ascending sequence.
///
/// `second` spans must not fall inside a span `first` transformed; the
/// formatter only composes passes that touch disjoint regions (e.g. a
/// stripped "www." prefix followed by IDN decoding of the remainder).
pub fn merge_sequential_adjustments(first: &[Adjustment], second: &mut Vec<Adjustment>) {
    for adjustment in second.iter_mut() {
        // Walk `first` accumulating its net length change for every span
        // that ends at or before this adjustment in the intermediate text.
        let mut shift = 0isize;
        for earlier in first {
            let intermediate_begin =
                usize::try_from(earlier.original_offset as isize + shift).unwrap_or(0);
            if adjustment.original_offset >= intermediate_begin + earlier.output_length {
                shift += earlier.output_length as isize - earlier.original_length as isize;
            } else {
                break;
            }
        }
        adjustment.original_offset =
            usize::try_from(adjustment.original_offset as isize - shift).unwrap_or(0);
    }

    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut remaining = first.iter().peekable();
    for adjustment in second.drain(..) {
        while let Some(earlier) = remaining.peek() {
            if earlier.original_offset <= adjustment.original_offset {
                merged.push(**earlier);
                remaining.next();
            } else {
                break;
            }
        }
        merged.push(adjustment);
    }
    merged.extend(remaining.copied());
    *second = merged;
}
