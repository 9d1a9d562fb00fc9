//! The order draft: a four-step linear state machine.
//!
//! `Upload → Options → Delivery → Review`. Forward transitions are guarded
//! (at least one file past Upload, a shipping address past Delivery when
//! courier is selected); backward transitions are always allowed, and the
//! machine clamps at both ends. Submission packages the draft into an
//! [`OrderSubmission`] (dropping the binary payloads) and delegates to
//! the store; a rejected submission hands the draft back intact for retry.

use core::fmt;

use thiserror::Error;
use tracing::{debug, info};

use print_pro_core::{
    DeliveryOption, FileId, LineItem, Money, OrderSubmission, PrintOrder, PrintSize, PrintType,
    UserId, pricing,
};
use print_pro_store::OrderStore;

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types accepted for upload.
pub const ALLOWED_FILE_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// A file as selected by the user, before validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name, used for deduplication and shown on the order.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// An accepted upload living inside the draft, with its print options.
///
/// Unlike a finalized [`LineItem`], this still owns the binary payload;
/// the payload is dropped when the draft is submitted or abandoned.
#[derive(Debug, Clone)]
pub struct DraftFile {
    id: FileId,
    name: String,
    bytes: Vec<u8>,
    /// Color mode; defaults to black & white.
    pub print_type: PrintType,
    /// Physical size; defaults to A4.
    pub print_size: PrintSize,
    /// Copies; always at least 1.
    pub quantity: u32,
}

impl DraftFile {
    /// Identifier assigned at upload.
    #[must_use]
    pub const fn id(&self) -> &FileId {
        &self.id
    }

    /// The uploaded file's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the payload in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn to_line_item(&self) -> LineItem {
        LineItem {
            id: self.id.clone(),
            file_name: self.name.clone(),
            file_size: self.size(),
            print_type: self.print_type,
            print_size: self.print_size,
            quantity: self.quantity,
        }
    }
}

/// Why an upload was rejected. Non-fatal: the draft is unchanged and the
/// user corrects and retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The file exceeds [`MAX_FILE_SIZE`].
    #[error("file \"{name}\" is too large (max 5MB)")]
    TooLarge {
        /// Name of the offending file.
        name: String,
    },
    /// The declared MIME type is not in [`ALLOWED_FILE_TYPES`].
    #[error("file type for \"{name}\" is not supported")]
    UnsupportedType {
        /// Name of the offending file.
        name: String,
    },
    /// A file with this name is already in the draft.
    #[error("file \"{name}\" is already in this order")]
    Duplicate {
        /// Name of the offending file.
        name: String,
    },
}

/// Why a forward step transition was blocked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceError {
    /// Leaving Upload requires at least one accepted file.
    #[error("add at least one file before continuing")]
    NoFiles,
    /// Leaving Delivery with courier selected requires an address.
    #[error("a shipping address is required for courier delivery")]
    AddressRequired,
}

/// A submission the store rejected, carrying the untouched draft so the
/// user can retry.
#[derive(Debug)]
pub struct SubmitRejected {
    /// The preserved draft.
    pub draft: OrderDraft,
    /// Why submission was refused.
    pub reason: SubmitError,
}

/// Why a submission was refused before reaching the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Submission is only offered on the Review step.
    #[error("order is not ready for submission")]
    NotAtReview,
}

/// The four steps of the order workflow, indexed 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    /// Select documents.
    #[default]
    Upload,
    /// Choose type, size, and quantity per file.
    Options,
    /// Pick a delivery method.
    Delivery,
    /// Read-only summary; submission is the only action.
    Review,
}

impl Step {
    /// One-based index, as shown in the stepper.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Options => 2,
            Self::Delivery => 3,
            Self::Review => 4,
        }
    }

    const fn forward(self) -> Self {
        match self {
            Self::Upload => Self::Options,
            Self::Options => Self::Delivery,
            // Clamps at Review; the machine never passes step 4.
            Self::Delivery | Self::Review => Self::Review,
        }
    }

    const fn backward(self) -> Self {
        match self {
            // Clamps at Upload; the machine never drops below step 1.
            Self::Upload | Self::Options => Self::Upload,
            Self::Delivery => Self::Options,
            Self::Review => Self::Delivery,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => write!(f, "Upload"),
            Self::Options => write!(f, "Options"),
            Self::Delivery => write!(f, "Delivery"),
            Self::Review => write!(f, "Review"),
        }
    }
}

/// An order under construction for one user.
#[derive(Debug)]
pub struct OrderDraft {
    user_id: UserId,
    step: Step,
    files: Vec<DraftFile>,
    delivery: DeliveryOption,
    address: String,
}

impl OrderDraft {
    /// Start an empty draft at the Upload step.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            step: Step::Upload,
            files: Vec::new(),
            delivery: DeliveryOption::default(),
            address: String::new(),
        }
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// The accepted files, in upload order.
    #[must_use]
    pub fn files(&self) -> &[DraftFile] {
        &self.files
    }

    /// The selected delivery option.
    #[must_use]
    pub const fn delivery(&self) -> DeliveryOption {
        self.delivery
    }

    // ------------------------------------------------------------------
    // Step 1: Upload
    // ------------------------------------------------------------------

    /// Validate and accept a file selection.
    ///
    /// Accepted files enter the draft with the default options: black &
    /// white, A4, one copy.
    ///
    /// # Errors
    ///
    /// [`UploadError`] when the file is over the size ceiling, of a
    /// disallowed type, or a duplicate of a name already in the draft.
    /// The draft is unchanged on error.
    pub fn add_file(&mut self, upload: FileUpload) -> Result<FileId, UploadError> {
        if upload.bytes.len() as u64 > MAX_FILE_SIZE {
            return Err(UploadError::TooLarge { name: upload.name });
        }
        if !ALLOWED_FILE_TYPES.contains(&upload.content_type.as_str()) {
            return Err(UploadError::UnsupportedType { name: upload.name });
        }
        if self.files.iter().any(|file| file.name == upload.name) {
            return Err(UploadError::Duplicate { name: upload.name });
        }

        debug!(name = %upload.name, bytes = upload.bytes.len(), "file accepted");
        let id = FileId::generate();
        self.files.push(DraftFile {
            id: id.clone(),
            name: upload.name,
            bytes: upload.bytes,
            print_type: PrintType::default(),
            print_size: PrintSize::default(),
            quantity: 1,
        });
        Ok(id)
    }

    /// Remove a file from the draft. Returns whether anything was removed.
    pub fn remove_file(&mut self, id: &FileId) -> bool {
        let before = self.files.len();
        self.files.retain(|file| &file.id != id);
        self.files.len() < before
    }

    // ------------------------------------------------------------------
    // Step 2: Options
    // ------------------------------------------------------------------

    /// Set the color mode of one file. Returns whether the file exists.
    pub fn set_print_type(&mut self, id: &FileId, print_type: PrintType) -> bool {
        self.file_mut(id)
            .map(|file| file.print_type = print_type)
            .is_some()
    }

    /// Set the physical size of one file. Returns whether the file exists.
    pub fn set_print_size(&mut self, id: &FileId, print_size: PrintSize) -> bool {
        self.file_mut(id)
            .map(|file| file.print_size = print_size)
            .is_some()
    }

    /// Set the copy count of one file, coercing zero to 1. Returns whether
    /// the file exists.
    pub fn set_quantity(&mut self, id: &FileId, quantity: u32) -> bool {
        self.file_mut(id)
            .map(|file| file.quantity = quantity.max(1))
            .is_some()
    }

    fn file_mut(&mut self, id: &FileId) -> Option<&mut DraftFile> {
        self.files.iter_mut().find(|file| &file.id == id)
    }

    // ------------------------------------------------------------------
    // Step 3: Delivery
    // ------------------------------------------------------------------

    /// Choose the delivery option.
    pub const fn set_delivery(&mut self, delivery: DeliveryOption) {
        self.delivery = delivery;
    }

    /// Set the shipping address (only meaningful for courier delivery).
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    // ------------------------------------------------------------------
    // Pricing (live on every step)
    // ------------------------------------------------------------------

    /// Print cost before the delivery fee.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        pricing::subtotal(self.line_items().iter())
    }

    /// Fee for the selected delivery option.
    #[must_use]
    pub fn delivery_fee(&self) -> Money {
        pricing::delivery_fee(self.delivery)
    }

    /// Grand total: subtotal plus delivery fee.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal() + self.delivery_fee()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Whether the forward guard for the current step passes.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.advance_guard().is_ok()
    }

    fn advance_guard(&self) -> Result<(), AdvanceError> {
        match self.step {
            Step::Upload if self.files.is_empty() => Err(AdvanceError::NoFiles),
            Step::Delivery
                if self.delivery.requires_address() && self.address.trim().is_empty() =>
            {
                Err(AdvanceError::AddressRequired)
            }
            _ => Ok(()),
        }
    }

    /// Advance to the next step.
    ///
    /// # Errors
    ///
    /// [`AdvanceError`] when the current step's guard blocks the move; the
    /// draft stays where it is.
    pub fn next(&mut self) -> Result<Step, AdvanceError> {
        self.advance_guard()?;
        self.step = self.step.forward();
        Ok(self.step)
    }

    /// Go back one step. Always allowed; clamps at Upload.
    pub const fn back(&mut self) -> Step {
        self.step = self.step.backward();
        self.step
    }

    // ------------------------------------------------------------------
    // Step 4: Review / submission
    // ------------------------------------------------------------------

    fn line_items(&self) -> Vec<LineItem> {
        self.files.iter().map(DraftFile::to_line_item).collect()
    }

    /// Package the draft and hand it to the store.
    ///
    /// Binary payloads are dropped; the address travels only when courier
    /// delivery is selected. On success the draft is consumed and the
    /// stored order returned.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected`], carrying the draft back intact, when the draft
    /// is not on the Review step.
    pub async fn submit(self, store: &impl OrderStore) -> Result<PrintOrder, SubmitRejected> {
        if self.step != Step::Review {
            return Err(SubmitRejected {
                draft: self,
                reason: SubmitError::NotAtReview,
            });
        }

        let submission = OrderSubmission {
            user_id: self.user_id.clone(),
            files: self.line_items(),
            delivery_option: self.delivery,
            total_cost: self.total(),
            shipping_address: self
                .delivery
                .requires_address()
                .then(|| self.address.trim().to_owned()),
        };

        let order = store.submit_order(submission).await;
        info!(order_id = %order.id, total = %order.total_cost, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use print_pro_store::MockStore;

    fn upload(name: &str, content_type: &str, size: usize) -> FileUpload {
        FileUpload {
            name: name.to_owned(),
            content_type: content_type.to_owned(),
            bytes: vec![0; size],
        }
    }

    fn draft_with_one_file() -> OrderDraft {
        let mut draft = OrderDraft::new(UserId::new("user1"));
        draft.add_file(upload("resume.pdf", "application/pdf", 2048)).unwrap();
        draft
    }

    #[test]
    fn test_accepted_files_get_default_options() {
        let draft = draft_with_one_file();
        let file = &draft.files()[0];
        assert_eq!(file.print_type, PrintType::BlackAndWhite);
        assert_eq!(file.print_size, PrintSize::A4);
        assert_eq!(file.quantity, 1);
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let mut draft = OrderDraft::new(UserId::new("user1"));
        let result = draft.add_file(upload("big.pdf", "application/pdf", 6 * 1024 * 1024));
        assert_eq!(
            result.unwrap_err(),
            UploadError::TooLarge { name: "big.pdf".to_owned() }
        );
        assert!(draft.files().is_empty());
    }

    #[test]
    fn test_file_at_the_size_ceiling_is_accepted() {
        let mut draft = OrderDraft::new(UserId::new("user1"));
        assert!(draft.add_file(upload("edge.png", "image/png", 5 * 1024 * 1024)).is_ok());
    }

    #[test]
    fn test_disallowed_type_is_rejected() {
        let mut draft = OrderDraft::new(UserId::new("user1"));
        let result = draft.add_file(upload("video.mp4", "video/mp4", 1024));
        assert_eq!(
            result.unwrap_err(),
            UploadError::UnsupportedType { name: "video.mp4".to_owned() }
        );
        assert!(draft.files().is_empty());
    }

    #[test]
    fn test_duplicate_names_collapse_to_one_line_item() {
        let mut draft = draft_with_one_file();
        let result = draft.add_file(upload("resume.pdf", "application/pdf", 1024));
        assert_eq!(
            result.unwrap_err(),
            UploadError::Duplicate { name: "resume.pdf".to_owned() }
        );
        assert_eq!(draft.files().len(), 1);
    }

    #[test]
    fn test_remove_file() {
        let mut draft = draft_with_one_file();
        let id = draft.files()[0].id().clone();
        assert!(draft.remove_file(&id));
        assert!(draft.files().is_empty());
        assert!(!draft.remove_file(&id));
    }

    #[test]
    fn test_zero_quantity_is_coerced_to_one() {
        let mut draft = draft_with_one_file();
        let id = draft.files()[0].id().clone();
        assert!(draft.set_quantity(&id, 0));
        assert_eq!(draft.files()[0].quantity, 1);
        assert!(draft.set_quantity(&id, 7));
        assert_eq!(draft.files()[0].quantity, 7);
    }

    #[test]
    fn test_option_edits_on_unknown_file_report_false() {
        let mut draft = draft_with_one_file();
        let ghost = FileId::new("ghost");
        assert!(!draft.set_print_type(&ghost, PrintType::Color));
        assert!(!draft.set_print_size(&ghost, PrintSize::A5));
    }

    #[test]
    fn test_upload_step_requires_a_file_to_advance() {
        let mut draft = OrderDraft::new(UserId::new("user1"));
        assert!(!draft.can_advance());
        assert_eq!(draft.next(), Err(AdvanceError::NoFiles));
        assert_eq!(draft.step(), Step::Upload);

        draft.add_file(upload("a.pdf", "application/pdf", 10)).unwrap();
        assert_eq!(draft.next(), Ok(Step::Options));
    }

    #[test]
    fn test_courier_requires_an_address_to_leave_delivery() {
        let mut draft = draft_with_one_file();
        draft.next().unwrap();
        draft.next().unwrap();
        assert_eq!(draft.step(), Step::Delivery);

        draft.set_delivery(DeliveryOption::Courier);
        assert_eq!(draft.next(), Err(AdvanceError::AddressRequired));
        draft.set_address("   ");
        assert_eq!(draft.next(), Err(AdvanceError::AddressRequired));

        draft.set_address("123 Main St");
        assert_eq!(draft.next(), Ok(Step::Review));
    }

    #[test]
    fn test_pickup_needs_no_address() {
        let mut draft = draft_with_one_file();
        draft.next().unwrap();
        draft.next().unwrap();
        assert_eq!(draft.next(), Ok(Step::Review));
    }

    #[test]
    fn test_machine_clamps_at_both_ends() {
        let mut draft = draft_with_one_file();
        assert_eq!(draft.back(), Step::Upload);
        for _ in 0..6 {
            let _ = draft.next();
        }
        assert_eq!(draft.step(), Step::Review);
        assert_eq!(draft.step().index(), 4);
    }

    #[test]
    fn test_live_totals_follow_option_edits() {
        let mut draft = draft_with_one_file();
        let id = draft.files()[0].id().clone();
        assert_eq!(draft.total(), Money::from_rupees(2));

        draft.set_quantity(&id, 2);
        assert_eq!(draft.subtotal(), Money::from_rupees(4));

        draft.set_delivery(DeliveryOption::Courier);
        assert_eq!(draft.delivery_fee(), Money::from_rupees(50));
        assert_eq!(draft.total(), Money::from_rupees(54));
    }

    #[tokio::test]
    async fn test_submit_appends_exactly_one_pending_order() {
        let store = MockStore::new(Duration::ZERO);
        let mut draft = draft_with_one_file();
        let id = draft.files()[0].id().clone();
        draft.set_quantity(&id, 2);
        while draft.step() != Step::Review {
            draft.next().unwrap();
        }

        let order = draft.submit(&store).await.unwrap();

        assert_eq!(store.order_count().await, 1);
        assert_eq!(order.id.as_str(), "ORD-001");
        assert_eq!(order.total_cost, Money::from_rupees(4));
        assert_eq!(order.files[0].file_name, "resume.pdf");
        assert_eq!(order.files[0].file_size, 2048);
        assert!(order.shipping_address.is_none());
    }

    #[tokio::test]
    async fn test_submit_sends_address_only_for_courier() {
        let store = MockStore::new(Duration::ZERO);
        let mut draft = draft_with_one_file();
        draft.set_delivery(DeliveryOption::Courier);
        draft.set_address("  123 Main St ");
        while draft.step() != Step::Review {
            draft.next().unwrap();
        }

        let order = draft.submit(&store).await.unwrap();
        assert_eq!(order.shipping_address.as_deref(), Some("123 Main St"));
    }

    #[tokio::test]
    async fn test_submit_before_review_returns_the_draft_intact() {
        let store = MockStore::new(Duration::ZERO);
        let draft = draft_with_one_file();

        let rejected = draft.submit(&store).await.unwrap_err();
        assert_eq!(rejected.reason, SubmitError::NotAtReview);
        assert_eq!(rejected.draft.files().len(), 1);
        assert_eq!(store.order_count().await, 0);
    }
}
