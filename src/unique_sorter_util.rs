use crate::token_parser_util::parse_integer;
use fxhash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Inserts `candidate` into `values` at the position that keeps the sequence
/// strictly ascending, or does nothing if the value was seen before.
///
/// `counts` is the presence index kept in sync with `values`: one entry per
/// distinct integer, holding how many times it occurred in the input. The
/// first occurrence wins; later ones only bump the count.
pub fn insert_unique(values: &mut Vec<i64>, counts: &mut FxHashMap<i64, u32>, candidate: i64) {
    if let Some(count) = counts.get_mut(&candidate) {
        *count += 1;
        return;
    }
    match values.binary_search(&candidate) {
        Ok(_) => {}
        Err(position) => {
            values.insert(position, candidate);
            counts.insert(candidate, 1);
        }
    }
}

/// In-place quicksort driven by an explicit stack of (low, high) sub-range
/// bounds instead of recursive call frames.
///
/// The pivot is always the last element of the active range, no randomization
/// and no median-of-three. Sorted-descending input degrades to O(n^2); that is
/// the contract, keep the pivot rule as is.
pub fn iterative_quicksort(values: &mut [i64]) {
    if values.len() < 2 {
        return;
    }
    let mut pending: Vec<(usize, usize)> = vec![(0, values.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot_index = partition(values, low, high);
        if pivot_index > low {
            pending.push((low, pivot_index - 1));
        }
        if pivot_index < high {
            pending.push((pivot_index + 1, high));
        }
    }
}

/// Partitions `values[low..=high]` around the last element. Elements smaller
/// than the pivot are swapped leftward past a moving boundary, then the pivot
/// lands on the boundary. Returns the pivot's resting index.
fn partition(values: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = values[high];
    let mut boundary = low;
    for scan in low..high {
        if values[scan] < pivot {
            values.swap(boundary, scan);
            boundary += 1;
        }
    }
    values.swap(boundary, high);
    boundary
}

/// Reads `input_path` line by line and accumulates the distinct integers in
/// ascending order. Lines that do not parse as integers are skipped.
///
/// Accumulation already keeps the sequence sorted, but the finalizing
/// quicksort runs unconditionally: output must be sorted no matter how the
/// sequence was built up.
pub fn collect_unique_integers(input_path: &str) -> std::io::Result<Vec<i64>> {
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut unique_integers: Vec<i64> = Vec::new();
    let mut unique_counts: FxHashMap<i64, u32> = FxHashMap::default();
    for line in reader.lines() {
        let line = line?;
        if let Some(integer) = parse_integer(&line) {
            insert_unique(&mut unique_integers, &mut unique_counts, integer);
        }
    }
    iterative_quicksort(&mut unique_integers);
    Ok(unique_integers)
}

/// Writes the integers to `output_path` as decimal text, one per line.
/// The target is created or truncated, never merged with previous contents.
pub fn write_unique_integers(output_path: &str, unique_integers: &[i64]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    for integer in unique_integers {
        writeln!(writer, "{}", integer)?;
    }
    Ok(())
}

/// Reads the input file, finds the unique integers and writes them to the
/// output file in ascending order. Unopenable input or unwritable output is
/// fatal and propagates; a failure mid-write may leave a partial output file.
pub fn process_file(input_path: &str, output_path: &str) -> std::io::Result<()> {
    let unique_integers = collect_unique_integers(input_path)?;
    write_unique_integers(output_path, &unique_integers)
}
