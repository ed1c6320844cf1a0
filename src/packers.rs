//! Little endian (un)packing of integers stored in raw point records.

pub trait Packable: Sized {
    const SIZE: usize;

    /// # Panics
    ///
    /// Panics if `input` is shorter than `Self::SIZE`
    fn unpack_from(input: &[u8]) -> Self;

    /// # Panics
    ///
    /// Panics if `output` is shorter than `Self::SIZE`
    fn pack_into(&self, output: &mut [u8]);
}

macro_rules! impl_packable_for {
    ($($type:ty),*) => {
        $(
            impl Packable for $type {
                const SIZE: usize = std::mem::size_of::<$type>();

                fn unpack_from(input: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$type>()];
                    bytes.copy_from_slice(&input[..Self::SIZE]);
                    <$type>::from_le_bytes(bytes)
                }

                fn pack_into(&self, output: &mut [u8]) {
                    output[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_packable_for!(i32);
