pub mod bill;
pub mod route;
pub mod session;
pub mod upload;

pub use bill::{whole_amount, Bill, BillPayload, BillStatus, RawBill};
pub use route::Route;
pub use session::{AuthToken, Credentials, NewUser, Role, Session, StoredUser};
pub use upload::{SelectedFile, UploadReceipt, UploadRequest};
