use ecdh::{curves, BigInt, KeyExchangeParty, Point};

fn main() {
    println!("=== Elliptic-Curve Diffie-Hellman ===\n");

    demo_f17_group();
    demo_f17_exchange();
    demo_p192_exchange();
}

/// Enumerate the point group of the small demo curve and print its addition
/// table.
fn demo_f17_group() {
    println!("--- Point group of y^2 = x^3 + 7 over F_17 ---");

    let params = curves::f17();
    let curve = params.curve();
    let points = curve.enumerate_points();
    println!("{} points (including the identity):", points.len());
    for point in &points {
        print!("{}\t", point);
    }
    println!("\n");

    let affine: Vec<&Point> = points.iter().filter(|p| !p.is_identity()).collect();
    println!("Addition table:");
    print!("\t");
    for q in &affine {
        print!("{}\t", q);
    }
    println!();
    for &p in &affine {
        print!("{} >>\t", p);
        for &q in &affine {
            let sum = curve.add(p, q).expect("on-curve points always add");
            print!("{}\t", sum);
        }
        println!();
    }
    println!();
}

/// The known-answer exchange on the demo curve: scalars 3 and 5 meet at
/// [15]G = (8, 14).
fn demo_f17_exchange() {
    println!("--- Key exchange over F_17 (fixed scalars) ---");

    let mut alice =
        KeyExchangeParty::with_private_scalar(curves::f17(), "Alice", BigInt::from_u64(3))
            .expect("scalar 3 is in range");
    let mut bob = KeyExchangeParty::with_private_scalar(curves::f17(), "Bob", BigInt::from_u64(5))
        .expect("scalar 5 is in range");

    exchange_and_print(&mut alice, &mut bob);
}

/// A full-strength exchange over NIST P-192 with random private scalars.
fn demo_p192_exchange() {
    println!("--- Key exchange over NIST P-192 (random scalars) ---");

    let params = curves::p192();
    let mut rng = rand::rng();
    let mut alice =
        KeyExchangeParty::new(params.clone(), "Alice", &mut rng).expect("P-192 scalar generation");
    let mut bob =
        KeyExchangeParty::new(params.clone(), "Bob", &mut rng).expect("P-192 scalar generation");

    exchange_and_print(&mut alice, &mut bob);
}

fn exchange_and_print(alice: &mut KeyExchangeParty, bob: &mut KeyExchangeParty) {
    let alice_public = alice.public_point().clone();
    let bob_public = bob.public_point().clone();

    alice
        .derive_shared_secret(&bob_public)
        .expect("peer public point is valid");
    bob.derive_shared_secret(&alice_public)
        .expect("peer public point is valid");

    println!("{}", alice.shared_key_line().expect("exchange completed"));
    println!("{}", bob.shared_key_line().expect("exchange completed"));
    println!(
        "keys match: {}\n",
        alice.shared_secret() == bob.shared_secret()
    );
}
