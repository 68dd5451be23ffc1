//! SHAKE and cSHAKE extendable-output functions

use super::super::hooks::HashCore;
use super::super::{AlgorithmId, HashAlgorithm, HashSize};
use digest::{ExtendableOutput, Update};
use sha3::{CShake128, CShake128Core, CShake256, CShake256Core, Shake128, Shake256};
use std::fmt;
use std::marker::PhantomData;

/// Largest output accepted from an extendable-output function
pub const MAX_XOF_SIZE: usize = i32::MAX as usize;

const SHAKE128_SIZE: HashSize = HashSize::new(1, 32, MAX_XOF_SIZE);
const SHAKE256_SIZE: HashSize = HashSize::new(1, 64, MAX_XOF_SIZE);

/// Hooks for an XOF without parameters
struct Xof<X> {
    _xof: PhantomData<fn() -> X>,
}

impl<X> fmt::Debug for Xof<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Xof")
    }
}

impl<X: Default + Update + ExtendableOutput + 'static> HashCore for Xof<X> {
    fn hash_core(&self, data: &[u8], out: &mut [u8]) {
        let mut xof = X::default();
        xof.update(data);
        xof.finalize_xof_into(out);
    }
}

/// A cSHAKE instance built from its function name and customization string
trait CShakeXof: Update + ExtendableOutput + Sized {
    fn with_function_name(function_name: &[u8], customization: &[u8]) -> Self;
}

impl CShakeXof for CShake128 {
    fn with_function_name(function_name: &[u8], customization: &[u8]) -> Self {
        Self::from_core(CShake128Core::new_with_function_name(function_name, customization))
    }
}

impl CShakeXof for CShake256 {
    fn with_function_name(function_name: &[u8], customization: &[u8]) -> Self {
        Self::from_core(CShake256Core::new_with_function_name(function_name, customization))
    }
}

/// Hooks for cSHAKE with a fixed function name and customization string
struct CShake<X> {
    function_name: Vec<u8>,
    customization: Vec<u8>,
    _xof: PhantomData<fn() -> X>,
}

impl<X> fmt::Debug for CShake<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CShake")
            .field("function_name", &hex::encode(&self.function_name))
            .field("customization", &hex::encode(&self.customization))
            .finish()
    }
}

impl<X: CShakeXof + 'static> HashCore for CShake<X> {
    fn hash_core(&self, data: &[u8], out: &mut [u8]) {
        let mut xof = X::with_function_name(&self.function_name, &self.customization);
        xof.update(data);
        xof.finalize_xof_into(out);
    }
}

fn cshake<X: CShakeXof + 'static>(
    id: AlgorithmId,
    size: HashSize,
    function_name: &[u8],
    customization: &[u8],
) -> HashAlgorithm {
    let core = CShake::<X> {
        function_name: function_name.to_vec(),
        customization: customization.to_vec(),
        _xof: PhantomData,
    };
    HashAlgorithm::new(id, size, core)
}

impl HashAlgorithm {
    /// SHAKE128 producing 32 bytes by default
    #[must_use]
    pub fn shake128() -> Self {
        let core = Xof::<Shake128> { _xof: PhantomData };
        Self::new(AlgorithmId::Shake128, SHAKE128_SIZE, core)
    }

    /// SHAKE256 producing 64 bytes by default
    #[must_use]
    pub fn shake256() -> Self {
        let core = Xof::<Shake256> { _xof: PhantomData };
        Self::new(AlgorithmId::Shake256, SHAKE256_SIZE, core)
    }

    /// cSHAKE128 bound to a function name and customization string
    #[must_use]
    pub fn cshake128(function_name: &[u8], customization: &[u8]) -> Self {
        cshake::<CShake128>(
            AlgorithmId::CShake128,
            SHAKE128_SIZE,
            function_name,
            customization,
        )
    }

    /// cSHAKE256 bound to a function name and customization string
    #[must_use]
    pub fn cshake256(function_name: &[u8], customization: &[u8]) -> Self {
        cshake::<CShake256>(
            AlgorithmId::CShake256,
            SHAKE256_SIZE,
            function_name,
            customization,
        )
    }
}
