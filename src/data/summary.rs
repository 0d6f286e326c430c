use std::collections::{BTreeMap, HashMap};

// ---------------------------------------------------------------------------
// Frequency counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count occurrences of each distinct non-null value.
///
/// Result is ordered by count, highest first; equal counts keep the order in
/// which the values first appear.
pub fn value_counts<I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values.into_iter().flatten() {
        match index.get(&value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(CategoryCount {
                    label: value,
                    count: 1,
                });
            }
        }
    }

    // Stable sort: ties stay in first-appearance order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

// ---------------------------------------------------------------------------
// Grouped min / mean / max
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Per-group min, mean and max of `values`, grouped by the parallel `keys`.
///
/// Groups are ordered by label. Rows whose key or value is null are skipped.
pub fn group_stats(keys: &[Option<String>], values: &[Option<f64>]) -> Vec<GroupStats> {
    let mut groups: BTreeMap<&str, (usize, f64, f64, f64)> = BTreeMap::new();

    for (key, value) in keys.iter().zip(values) {
        let (Some(key), Some(value)) = (key.as_deref(), *value) else {
            continue;
        };
        let entry = groups
            .entry(key)
            .or_insert((0, 0.0, f64::INFINITY, f64::NEG_INFINITY));
        entry.0 += 1;
        entry.1 += value;
        entry.2 = entry.2.min(value);
        entry.3 = entry.3.max(value);
    }

    groups
        .into_iter()
        .map(|(label, (count, sum, min, max))| GroupStats {
            label: label.to_string(),
            count,
            min,
            mean: sum / count as f64,
            max,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Equal-width histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split `[min, max]` of `values` into `bins` equal-width buckets.
///
/// Buckets are half-open except the last, which also takes `max`, so the
/// counts always sum to `values.len()`. A constant sample is widened to
/// `[v - 0.5, v + 0.5]`; an empty one spans `[0, 1]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let (lo, hi) = match values.iter().copied().fold(None, |acc: Option<(f64, f64)>, v| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        })
    }) {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some(range) => range,
    };

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &v in values {
        let i = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}
