use log::*;
use mpz::BigNat;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let value = BigNat::from_unsigned(56)?;
    debug!("limbs: {}", value.to_hex_limbs());
    info!("rendering a {} limb value", value.len());
    println!("{}", value.to_decimal_string()?);
    Ok(())
}
