//! Interactive menu.
//!
//! Generic over the input and output streams so the whole loop can be driven
//! from tests. End of input behaves like choosing "Quit".

use std::io::{self, BufRead, Write};

use shopfront_core::ProductId;
use shopfront_store::{OrderLine, Store};

/// Run the menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    store: &mut Store,
    store_name: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output, "\n===== {store_name} Store Menu =====")?;
        writeln!(output, "1. List all products in store")?;
        writeln!(output, "2. Show total amount in store")?;
        writeln!(output, "3. Make an order")?;
        writeln!(output, "4. Quit")?;

        let Some(choice) = prompt(input, output, "Enter your choice (1-4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => list_products(store, output)?,
            "2" => show_total_quantity(store, output)?,
            "3" => make_order(store, input, output)?,
            "4" => {
                writeln!(output, "\nThank you for visiting {store_name}")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Please select 1-4.")?,
        }
    }
    Ok(())
}

pub fn list_products<W: Write>(store: &Store, output: &mut W) -> io::Result<()> {
    writeln!(output, "\nAvailable products:")?;
    for (idx, product) in store.active_products().into_iter().enumerate() {
        writeln!(output, "{}. {}", idx + 1, product.show())?;
    }
    Ok(())
}

pub fn show_total_quantity<W: Write>(store: &Store, output: &mut W) -> io::Result<()> {
    writeln!(output, "\nTotal quantity in store: {}", store.total_quantity())
}

/// Collect a shopping list by product number and hand it to the store.
///
/// Order errors are reported and swallowed; only IO errors escape.
pub fn make_order<R: BufRead, W: Write>(
    store: &mut Store,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let choices: Vec<ProductId> = {
        let products = store.active_products();
        if products.is_empty() {
            writeln!(output, "No products available in store.")?;
            return Ok(());
        }

        writeln!(output, "------")?;
        for (idx, product) in products.iter().enumerate() {
            writeln!(
                output,
                "{}. {}, Price: ${}, Quantity: {}",
                idx + 1,
                product.name(),
                product.price(),
                product.quantity()
            )?;
        }
        writeln!(output, "------")?;
        products.iter().map(|p| p.id_typed()).collect()
    };
    writeln!(output, "When you want to finish order, enter empty text.")?;

    let mut lines = Vec::new();
    loop {
        let Some(selection) = prompt(input, output, "Which product do you want? ")? else {
            break;
        };
        if selection.is_empty() {
            break;
        }

        let Some(number) = parse_number::<usize>(&selection) else {
            writeln!(output, "Please enter a valid product number.")?;
            continue;
        };
        let Some(&product_id) = number.checked_sub(1).and_then(|i| choices.get(i)) else {
            writeln!(output, "Invalid product number.")?;
            continue;
        };

        let Some(amount) = prompt(input, output, "What amount do you want? ")? else {
            break;
        };
        let Some(quantity) = parse_number::<i64>(&amount) else {
            writeln!(output, "Invalid quantity, please enter a number.")?;
            continue;
        };

        lines.push(OrderLine::new(product_id, quantity));
        writeln!(output, "Product added to list!\n")?;
    }

    if lines.is_empty() {
        return Ok(());
    }

    tracing::debug!(lines = lines.len(), "submitting order");
    match store.order(&lines) {
        Ok(total) => {
            tracing::info!(lines = lines.len(), total, "order placed");
            writeln!(output, "********")?;
            writeln!(output, "Order made! Total payment: ${total}")?;
        }
        Err(err) => {
            tracing::warn!(lines = lines.len(), %err, "order failed");
            writeln!(output, "Order failed: {err}")?;
        }
    }
    Ok(())
}

/// Print `message`, read one line, and return it trimmed. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Digits only: no sign, no whitespace, no overflow.
fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
