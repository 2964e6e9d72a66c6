use crate::dict::dict::Dict;

/// Borrowing iterator over every entry: buckets in index order, each chain
/// in chain order. Holding one excludes mutation of the dict for its whole
/// lifetime.
#[derive(Debug)]
pub struct DictIterator<'a> {
    dict: &'a Dict,
    index: usize,
    pos: usize,
}

impl Dict {
    pub fn iter(&self) -> DictIterator<'_> {
        DictIterator {
            dict: self,
            index: 0,
            pos: 0,
        }
    }
}

impl<'a> Iterator for DictIterator<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.dict.capacity() {
            let chain = &self.dict.ht_table[self.index];
            if self.pos < chain.len() {
                let entry = &chain[self.pos];
                self.pos += 1;
                return Some((entry.get_key(), entry.get_val()));
            }
            self.index += 1;
            self.pos = 0;
        }
        None
    }
}
