use super::prelude::*;

/// Resolves the address and checks its distance to the reference point.
///
/// An address that cannot be resolved is rejected, while a
/// failing provider is reported as an error.
pub fn check_address(
    resolver: &AddressResolver,
    validator: &ProximityValidator,
    label: &str,
) -> Result<ValidationOutcome> {
    match resolver.resolve(label) {
        Ok(pos) => Ok(validator.validate(pos)),
        Err(ResolutionFailure::NoMatch) => Ok(ValidationOutcome::RejectedUnresolvable),
        Err(ResolutionFailure::ProviderError(err)) => Err(Error::GeocodingUnavailable(err)),
    }
}
