use std::fmt::Write as _;

use crate::dict::dict::Dict;
use crate::dict::DICT_STATS_VECTLEN;

/// Snapshot of the table's bucket/chain shape, computed in one pass.
#[derive(Debug, Clone)]
pub struct DictStats {
    pub capacity: usize,
    pub used: usize,
    pub nonempty_buckets: usize,
    pub max_chain_len: usize,
    /// cl_vector[l] counts buckets with chain length l; the last slot
    /// collects everything at or beyond DICT_STATS_VECTLEN - 1.
    pub cl_vector: Vec<usize>,
}

impl Dict {
    pub fn stats(&self) -> DictStats {
        let mut stats = DictStats {
            capacity: self.capacity(),
            used: self.len(),
            nonempty_buckets: 0,
            max_chain_len: 0,
            cl_vector: vec![0; DICT_STATS_VECTLEN],
        };
        for chain in &self.ht_table {
            let len = chain.len();
            if len > 0 {
                stats.nonempty_buckets += 1;
            }
            if len > stats.max_chain_len {
                stats.max_chain_len = len;
            }
            stats.cl_vector[len.min(DICT_STATS_VECTLEN - 1)] += 1;
        }
        stats
    }
}

impl DictStats {
    /// Render a human readable multi-line summary.
    pub fn report(&self) -> String {
        let mut buf = String::new();
        if self.used == 0 {
            write!(&mut buf, "Hash table stats: No stats available for empty dictionaries\n").unwrap();
            return buf;
        }
        write!(
            &mut buf,
            "Hash table stats:\n table size: {}\n number of elements: {}\n",
            self.capacity, self.used
        )
        .unwrap();
        write!(
            &mut buf,
            " different slots: {}\n max chain length: {}\n avg chain length: {:.2}\n Chain length distribution:\n",
            self.nonempty_buckets,
            self.max_chain_len,
            self.used as f64 / self.nonempty_buckets as f64
        )
        .unwrap();
        for (len, count) in self.cl_vector.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            write!(&mut buf, "   {}: {}\n", len, count).unwrap();
        }
        buf
    }
}
