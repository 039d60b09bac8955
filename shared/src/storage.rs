/// A browser storage scope (`sessionStorage` or `localStorage`).
///
/// Reads are synchronous and never fail from the caller's point of view; an
/// unreadable key is the same as a missing one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
