//! Order commands: list, place, and set-status.

use std::path::{Path, PathBuf};

use tracing::warn;

use print_pro_core::{
    DeliveryOption, Email, OrderId, OrderStatus, PrintOrder, PrintSize, PrintType, User,
};
use print_pro_store::{MockStore, OrderStore};
use print_pro_storefront::{FileUpload, OrderBoard, OrderDraft, Page, Session, Step};

use super::CliError;

/// List one user's orders, or every order with `--all`.
///
/// # Errors
///
/// Fails when neither `--user` nor `--all` is given, or the user is unknown.
pub async fn list(store: &MockStore, user: Option<&str>, all: bool) -> Result<(), CliError> {
    let orders = if all {
        store.all_orders().await
    } else {
        let user = resolve_user(store, user.ok_or_else(|| {
            CliError::InvalidArgument("pass --user <email> or --all".to_owned())
        })?)
        .await?;
        store.orders_for_user(&user.id).await
    };

    print_orders(&orders);
    Ok(())
}

/// Walk the draft workflow end to end and place an order.
///
/// Rejected files are reported inline and skipped, exactly as the upload
/// step does in the browser; the order proceeds with whatever was accepted.
///
/// # Errors
///
/// Fails on an unknown user, unparseable option flags, unreadable files,
/// or a blocked step transition (no accepted files, missing courier
/// address).
#[allow(clippy::too_many_arguments)]
pub async fn place(
    store: &MockStore,
    user: &str,
    files: &[PathBuf],
    print_type: &str,
    print_size: &str,
    quantity: u32,
    delivery: &str,
    address: Option<&str>,
) -> Result<(), CliError> {
    let print_type: PrintType = parse_flag(print_type)?;
    let print_size: PrintSize = parse_flag(print_size)?;
    let delivery: DeliveryOption = parse_flag(delivery)?;

    let user = resolve_user(store, user).await?;
    let mut session = Session::new();
    session.login(user.clone());
    session.navigate(Page::NewOrder)?;

    // Step 1: Upload.
    let mut draft = OrderDraft::new(user.id);
    for path in files {
        let upload = read_upload(path)?;
        if let Err(err) = draft.add_file(upload) {
            report_rejected(&err.to_string());
        }
    }
    draft.next().map_err(print_pro_storefront::AppError::from)?;

    // Step 2: Options.
    let ids: Vec<_> = draft.files().iter().map(|f| f.id().clone()).collect();
    for id in &ids {
        draft.set_print_type(id, print_type);
        draft.set_print_size(id, print_size);
        draft.set_quantity(id, quantity);
    }
    draft.next().map_err(print_pro_storefront::AppError::from)?;

    // Step 3: Delivery.
    draft.set_delivery(delivery);
    if let Some(address) = address {
        draft.set_address(address);
    }
    draft.next().map_err(print_pro_storefront::AppError::from)?;

    // Step 4: Review and submit.
    debug_assert_eq!(draft.step(), Step::Review);
    print_summary(&draft);
    match draft.submit(store).await {
        Ok(order) => {
            print_placed(&order);
            Ok(())
        }
        Err(rejected) => {
            warn!(reason = %rejected.reason, "order not placed, draft preserved");
            Err(print_pro_storefront::AppError::SubmitFailed.into())
        }
    }
}

/// Update an order's status through the optimistic admin board.
///
/// # Errors
///
/// Fails when the status string is unparseable or the store does not know
/// the order (the board reverts in that case).
pub async fn set_status(store: &MockStore, order_id: &str, status: &str) -> Result<(), CliError> {
    let status: OrderStatus = parse_flag(status)?;
    let order_id = OrderId::new(order_id);

    let mut board = OrderBoard::load(store).await;
    board.set_status(store, &order_id, status).await?;
    print_status_updated(&order_id, status);
    Ok(())
}

async fn resolve_user(store: &MockStore, email: &str) -> Result<User, CliError> {
    let email = Email::parse(email)?;
    store
        .lookup_user(&email)
        .await
        .ok_or_else(|| CliError::UnknownUser(email.to_string()))
}

fn parse_flag<T: std::str::FromStr<Err = String>>(value: &str) -> Result<T, CliError> {
    value.parse().map_err(CliError::InvalidArgument)
}

fn read_upload(path: &Path) -> Result<FileUpload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(FileUpload {
        content_type: content_type_for(path).to_owned(),
        name,
        bytes,
    })
}

/// Map a file extension to the MIME type a browser would declare.
fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[allow(clippy::print_stdout)]
fn print_orders(orders: &[PrintOrder]) {
    if orders.is_empty() {
        println!("No orders.");
        return;
    }
    for order in orders {
        println!(
            "{}  {}  {:<10}  {:>10}  {}",
            order.id,
            order.order_date.format("%Y-%m-%d %H:%M"),
            order.status,
            order.total_cost.to_string(),
            order.user_id,
        );
        for item in &order.files {
            println!(
                "    {} ({}x {}, {})",
                item.file_name, item.quantity, item.print_type, item.print_size
            );
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_summary(draft: &OrderDraft) {
    println!("Order summary:");
    for file in draft.files() {
        println!(
            "  {} ({}x {}, {})",
            file.name(),
            file.quantity,
            file.print_type,
            file.print_size
        );
    }
    println!("  Subtotal: {}", draft.subtotal());
    println!("  Delivery ({}): {}", draft.delivery(), draft.delivery_fee());
    println!("  Total: {}", draft.total());
}

#[allow(clippy::print_stdout)]
fn print_placed(order: &PrintOrder) {
    println!("Order placed: {} ({})", order.id, order.status);
}

#[allow(clippy::print_stdout)]
fn print_status_updated(order_id: &OrderId, status: OrderStatus) {
    println!("{order_id} is now {status}");
}

#[allow(clippy::print_stderr)]
fn report_rejected(message: &str) {
    eprintln!("skipped: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for(Path::new("a.PDF")), "application/pdf");
        assert_eq!(content_type_for(Path::new("b.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("c.png")), "image/png");
        assert_eq!(content_type_for(Path::new("d.mp4")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }
}
