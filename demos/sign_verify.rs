use std::hint::black_box;

use rand::Rng;

use gxmss::signature::{
    SignatureScheme,
    generalized_xmss::instantiations_sha::lifetime_2_to_the_10::target_sum::SIGTargetSumLifetime10W4Off10,
};

fn main() {
    let mut rng = rand::rng();

    // 2^10 lifetime, full activation
    let activation_duration = SIGTargetSumLifetime10W4Off10::LIFETIME as u32;

    eprintln!("Running key_gen for 2^10 lifetime...");
    let (pk, sk) = black_box(SIGTargetSumLifetime10W4Off10::key_gen(
        &mut rng,
        0,
        activation_duration,
    ));
    eprintln!("Done. pk size: {} bytes", std::mem::size_of_val(&pk));

    let message = rng.random();
    let epoch = 42;

    let signature = SIGTargetSumLifetime10W4Off10::sign(&mut rng, &sk, epoch, &message)
        .expect("signing should succeed");
    eprintln!(
        "Signature for epoch {} verifies: {}",
        epoch,
        SIGTargetSumLifetime10W4Off10::verify(&pk, epoch, &message, &signature)
    );
}
