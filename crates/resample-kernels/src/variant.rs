//! Runtime-selectable kernels
//!
//! [`KernelVariant`] is the closed set of kernel families as a single sum
//! type. Use it when the family is chosen at runtime; use the concrete kernel
//! types when it is known statically.

use crate::kernels::{
    BoxKernel, CatmullRom, Cubic, Keys, MitchellNetravali, Quadratic, Triangle,
};
use crate::Kernel;
use resample_core::KernelFloat;
use std::fmt;

/// The kernel families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Box,
    Triangle,
    Quadratic,
    Cubic,
    CatmullRom,
    Keys,
    MitchellNetravali,
}

impl KernelKind {
    /// Every family, ordered by support length
    pub const ALL: [KernelKind; 7] = [
        KernelKind::Box,
        KernelKind::Triangle,
        KernelKind::Quadratic,
        KernelKind::Cubic,
        KernelKind::CatmullRom,
        KernelKind::Keys,
        KernelKind::MitchellNetravali,
    ];

    /// Canonical name of the family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Triangle => "triangle",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::CatmullRom => "catmull-rom",
            Self::Keys => "keys",
            Self::MitchellNetravali => "mitchell-netravali",
        }
    }

    /// Support length shared by every member of the family
    pub fn support_length(&self) -> usize {
        match self {
            Self::Box => 1,
            Self::Triangle => 2,
            Self::Quadratic => 3,
            Self::Cubic | Self::CatmullRom | Self::Keys | Self::MitchellNetravali => 4,
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kernel of any family
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelVariant<T: KernelFloat = f64> {
    Box(BoxKernel<T>),
    Triangle(Triangle<T>),
    Quadratic(Quadratic<T>),
    Cubic(Cubic<T>),
    CatmullRom(CatmullRom<T>),
    Keys(Keys<T>),
    MitchellNetravali(MitchellNetravali<T>),
}

impl<T: KernelFloat> KernelVariant<T> {
    /// The default member of a family
    ///
    /// Keys uses `a = -1/2`, Mitchell-Netravali uses `b = c = 1/3`.
    pub fn default_of(kind: KernelKind) -> Self {
        match kind {
            KernelKind::Box => Self::Box(BoxKernel::new()),
            KernelKind::Triangle => Self::Triangle(Triangle::new()),
            KernelKind::Quadratic => Self::Quadratic(Quadratic::new()),
            KernelKind::Cubic => Self::Cubic(Cubic::new()),
            KernelKind::CatmullRom => Self::CatmullRom(CatmullRom::new()),
            KernelKind::Keys => Self::Keys(Keys::default()),
            KernelKind::MitchellNetravali => Self::MitchellNetravali(MitchellNetravali::recommended()),
        }
    }

    /// Keys kernel with parameter `a`
    pub fn keys(a: T) -> Self {
        Self::Keys(Keys::new(a))
    }

    /// Mitchell-Netravali kernel with parameters `b` and `c`
    pub fn mitchell_netravali(b: T, c: T) -> Self {
        Self::MitchellNetravali(MitchellNetravali::new(b, c))
    }

    /// The family this kernel belongs to
    pub fn kind(&self) -> KernelKind {
        match self {
            Self::Box(_) => KernelKind::Box,
            Self::Triangle(_) => KernelKind::Triangle,
            Self::Quadratic(_) => KernelKind::Quadratic,
            Self::Cubic(_) => KernelKind::Cubic,
            Self::CatmullRom(_) => KernelKind::CatmullRom,
            Self::Keys(_) => KernelKind::Keys,
            Self::MitchellNetravali(_) => KernelKind::MitchellNetravali,
        }
    }

    /// Shape parameters: empty, `[a]` or `[b, c]`
    pub fn parameters(&self) -> Vec<T> {
        match self {
            Self::Keys(k) => vec![k.a()],
            Self::MitchellNetravali(k) => vec![k.b(), k.c()],
            _ => Vec::new(),
        }
    }
}

impl<T: KernelFloat> Default for KernelVariant<T> {
    fn default() -> Self {
        Self::CatmullRom(CatmullRom::new())
    }
}

impl<T: KernelFloat> Kernel<T> for KernelVariant<T> {
    fn support_length(&self) -> usize {
        self.kind().support_length()
    }

    fn is_cardinal(&self) -> bool {
        match self {
            Self::Box(k) => k.is_cardinal(),
            Self::Triangle(k) => k.is_cardinal(),
            Self::Quadratic(k) => k.is_cardinal(),
            Self::Cubic(k) => k.is_cardinal(),
            Self::CatmullRom(k) => k.is_cardinal(),
            Self::Keys(k) => k.is_cardinal(),
            Self::MitchellNetravali(k) => k.is_cardinal(),
        }
    }

    fn is_normalized(&self) -> bool {
        match self {
            Self::Box(k) => k.is_normalized(),
            Self::Triangle(k) => k.is_normalized(),
            Self::Quadratic(k) => k.is_normalized(),
            Self::Cubic(k) => k.is_normalized(),
            Self::CatmullRom(k) => k.is_normalized(),
            Self::Keys(k) => k.is_normalized(),
            Self::MitchellNetravali(k) => k.is_normalized(),
        }
    }

    #[inline]
    fn eval(&self, x: T) -> T {
        match self {
            Self::Box(k) => k.eval(x),
            Self::Triangle(k) => k.eval(x),
            Self::Quadratic(k) => k.eval(x),
            Self::Cubic(k) => k.eval(x),
            Self::CatmullRom(k) => k.eval(x),
            Self::Keys(k) => k.eval(x),
            Self::MitchellNetravali(k) => k.eval(x),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

macro_rules! impl_from_kernel {
    ($($kernel:ident => $variant:ident),* $(,)?) => {
        $(
            impl<T: KernelFloat> From<$kernel<T>> for KernelVariant<T> {
                fn from(kernel: $kernel<T>) -> Self {
                    Self::$variant(kernel)
                }
            }
        )*
    };
}

impl_from_kernel! {
    BoxKernel => Box,
    Triangle => Triangle,
    Quadratic => Quadratic,
    Cubic => Cubic,
    CatmullRom => CatmullRom,
    Keys => Keys,
    MitchellNetravali => MitchellNetravali,
}
