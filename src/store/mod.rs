/// In-process contact storage
///
/// The store lives for the lifetime of the process and is rebuilt from the seed
/// records on every start. Nothing is written to disk.
///
/// All reads and writes go through a single async `RwLock`, so concurrent
/// creates are serialized and append order matches lock acquisition order.
///
/// ## Usage
///
/// ```rust,ignore
/// use contactbook::store::ContactStore;
///
/// let store = ContactStore::seeded();
/// store.append(contact).await;
/// let found = store.find(1).await;
/// ```

pub mod memory;
pub mod seed;

pub use memory::ContactStore;
pub use seed::seed_contacts;
