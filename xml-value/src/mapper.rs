/// Single-method conversion capability between generic data and domain items
///
/// Implemented for every `Fn(I) -> O`, so closures and plain functions can be passed wherever a
/// mapper is expected.
pub trait Mapper<I, O> {
	/// Convert `input`
	fn map(&self, input: I) -> O;
}

impl<I, O, F> Mapper<I, O> for F
where
	F: Fn(I) -> O,
{
	fn map(&self, input: I) -> O {
		self(input)
	}
}
