//! One bucket's entries as an owned singly linked chain.
//!
//! Structural layer under `HashTable`: it knows nothing about hashing,
//! only about one chain's ordering and uniqueness rules. Every walk is
//! a loop, never recursion, so chain length cannot exhaust the stack
//! even when every key in the table collides into one bucket. That
//! includes teardown: the default recursive drop of a `Box` chain is
//! replaced with an explicit iterative `Drop`.

/// A single entry: owned key, owned value, owned link to the next entry.
struct Node {
    key: String,
    value: String,
    next: Option<Box<Node>>,
}

/// A bucket chain. Invariants:
/// - keys are pairwise distinct within the chain;
/// - entries are ordered oldest-first (append at tail, never prepend).
pub(crate) struct Chain {
    head: Option<Box<Node>>,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Chain { head: None }
    }

    // Chain length and emptiness are test observability; HashTable
    // tracks its entry count itself.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        let mut count = 0;
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            count += 1;
            cur = node.next.as_deref();
        }
        count
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Scans for `key`; returns the stored value if present.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key == key {
                return Some(node.value.as_str());
            }
            cur = node.next.as_deref();
        }
        None
    }

    /// Inserts `key`/`value`: overwrites in place when an equal key is
    /// already chained (chain shape untouched), otherwise appends a new
    /// node at the tail. Returns `true` when a node was appended.
    pub(crate) fn insert(&mut self, key: String, value: String) -> bool {
        let mut cur = &mut self.head;
        loop {
            match cur {
                Some(node) if node.key == key => {
                    node.value = value;
                    return false;
                }
                Some(node) => cur = &mut node.next,
                None => {
                    *cur = Some(Box::new(Node {
                        key,
                        value,
                        next: None,
                    }));
                    return true;
                }
            }
        }
    }

    /// Splices out the node holding `key` and returns its value.
    ///
    /// The cursor is a `&mut Option<Box<Node>>` slot, so removing the
    /// head is the same explicit case as removing any later node: the
    /// matched slot is rewritten to point at the node's successor.
    pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
        let mut cur = &mut self.head;
        while cur.is_some() {
            if cur.as_deref().is_some_and(|node| node.key == key) {
                // Checked Some above; unlink and rewire the slot.
                let node = cur.take()?;
                *cur = node.next;
                return Some(node.value);
            }
            cur = &mut cur.as_mut()?.next;
        }
        None
    }

    /// Detaches and returns the head entry; used to drain a chain
    /// during rehashing while preserving oldest-first order.
    pub(crate) fn pop(&mut self) -> Option<(String, String)> {
        self.head.take().map(|node| {
            self.head = node.next;
            (node.key, node.value)
        })
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            out.push(node.key.clone());
            cur = node.next.as_deref();
        }
        out
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink node by node; letting Box drop the chain would recurse
        // once per entry.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
