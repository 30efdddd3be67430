//! Console walkthrough of [`Stock`] clamping rules.
//!
//! ```text
//! cargo run -p varasto-web --bin stock-demo
//! ```

use varasto_core::Stock;

/// Reports `stock` before and after one add and one take.
fn check_stock(stock: &mut Stock, name: &str, add: f64, take: f64) -> Vec<String> {
    let mut lines = vec![format!("{name} before changes: {stock}")];
    if add > 0.0 {
        stock.add(add);
        lines.push(format!("Added {add}"));
        if take > 0.0 {
            stock.take(take);
            lines.push(format!("Took {take}"));
            if stock.is_full() {
                lines.push("Stock is full!".to_string());
            }
        }
    }
    lines.push(format!("{name} after: {stock}"));
    lines
}

// 3.14 is a quantity here, not pi.
#[allow(clippy::approx_constant)]
fn main() {
    let mut juice = Stock::new(100.0);
    let mut beer = Stock::with_balance(100.0, 20.2);

    for line in check_stock(&mut juice, "Juice stock", 50.7, 3.14) {
        println!("{line}");
    }

    println!("After creation:");
    println!("Juice stock: {juice}");
    println!("Beer stock: {beer}");

    println!("Beer getters:");
    println!("balance = {}", beer.balance());
    println!("capacity = {}", beer.capacity());
    println!("remaining_capacity = {}", beer.remaining_capacity());

    println!("Juice setters:");
    println!("Adding 50.7");
    juice.add(50.7);
    println!("Juice stock: {juice}");
    println!("Taking 3.14");
    juice.take(3.14);
    println!("Juice stock: {juice}");

    println!("Invalid construction:");
    println!("Stock::new(-100.0)");
    println!("{}", Stock::new(-100.0));
    println!("Stock::with_balance(100.0, -50.7)");
    println!("{}", Stock::with_balance(100.0, -50.7));

    println!("Beer stock: {beer}");
    println!("beer.add(1000.0)");
    beer.add(1000.0);
    println!("Beer stock: {beer}");

    println!("Juice stock: {juice}");
    println!("juice.add(-666.0)");
    juice.add(-666.0);
    println!("Juice stock: {juice}");

    println!("Beer stock: {beer}");
    println!("beer.take(1000.0)");
    let got = beer.take(1000.0);
    println!("got {got}");
    println!("Beer stock: {beer}");

    println!("Juice stock: {juice}");
    println!("juice.take(-32.9)");
    let got = juice.take(-32.9);
    println!("got {got}");
    println!("Juice stock: {juice}");
}
