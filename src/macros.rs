macro_rules! with_width {
    ($width:expr, $recv:expr, $method:ident, $($arg:expr),* $(,)?) => {
        match $width {
            $crate::Width::B25 => $recv.$method::<u8, 1>($($arg),*),
            $crate::Width::B50 => $recv.$method::<u8, 2>($($arg),*),
            $crate::Width::B100 => $recv.$method::<u8, 4>($($arg),*),
            $crate::Width::B200 => $recv.$method::<u8, 8>($($arg),*),
            $crate::Width::B400 => $recv.$method::<u16, 16>($($arg),*),
            $crate::Width::B800 => $recv.$method::<u32, 32>($($arg),*),
            $crate::Width::B1600 => $recv.$method::<u64, 64>($($arg),*),
        }
    };
}

pub(crate) use with_width;
