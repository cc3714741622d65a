use crate::domain::bank_order::BankOrder;
use crate::domain::ports::BankOrderStore;
use crate::error::{BankOrderError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing bank orders, keyed by big-endian id.
pub const CF_BANK_ORDERS: &str = "bank_orders";
/// Column Family for bookkeeping values such as the id sequence.
pub const CF_META: &str = "meta";

const LAST_ID_KEY: &[u8] = b"last_id";

/// A persistent bank order store backed by RocksDB.
///
/// Orders are stored as JSON. The id sequence lives in its own column family
/// so identifiers keep increasing across restarts.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBBankOrderStore {
    db: Arc<DB>,
    id_lock: Arc<Mutex<()>>,
}

impl RocksDBBankOrderStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_BANK_ORDERS, Options::default());
        let cf_meta = ColumnFamilyDescriptor::new(CF_META, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders, cf_meta])?;

        Ok(Self {
            db: Arc::new(db),
            id_lock: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            BankOrderError::InternalError(Box::new(std::io::Error::other(format!(
                "Column family {} not found",
                name
            ))))
        })
    }

    fn last_id(&self) -> Result<u64> {
        let meta = self.cf(CF_META)?;
        match self.db.get_cf(meta, LAST_ID_KEY)? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    BankOrderError::InternalError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "Corrupted id sequence",
                    )))
                })?;
                Ok(u64::from_be_bytes(raw))
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl BankOrderStore for RocksDBBankOrderStore {
    async fn save(&self, mut order: BankOrder) -> Result<BankOrder> {
        let _guard = self.id_lock.lock().await;

        let last_id = self.last_id()?;
        let id = order.id.unwrap_or(last_id + 1);
        order.id = Some(id);

        let value = serde_json::to_vec(&order)?;

        let mut batch = rocksdb::WriteBatch::default();
        batch.put_cf(self.cf(CF_BANK_ORDERS)?, id.to_be_bytes(), value);
        batch.put_cf(self.cf(CF_META)?, LAST_ID_KEY, last_id.max(id).to_be_bytes());
        self.db.write(batch)?;

        Ok(order)
    }

    async fn get(&self, id: u64) -> Result<Option<BankOrder>> {
        let cf = self.cf(CF_BANK_ORDERS)?;
        match self.db.get_cf(cf, id.to_be_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<BankOrder>> {
        let cf = self.cf(CF_BANK_ORDERS)?;

        let mut orders = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            orders.push(serde_json::from_slice(&value)?);
        }

        Ok(orders)
    }
}
