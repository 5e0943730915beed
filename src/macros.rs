/// Componentwise vector-space operators for entity types whose fields all
/// support `+`, `-`, negation and scaling by `f32`.
macro_rules! impl_linear_ops {
    ($type_:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $type_ {
            type Output = $type_;
            #[inline]
            fn add(self, rhs: $type_) -> $type_ {
                $type_ { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $type_ {
            type Output = $type_;
            #[inline]
            fn sub(self, rhs: $type_) -> $type_ {
                $type_ { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $type_ {
            type Output = $type_;
            #[inline]
            fn neg(self) -> $type_ {
                $type_ { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $type_ {
            type Output = $type_;
            #[inline]
            fn mul(self, rhs: f32) -> $type_ {
                $type_ { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$type_> for f32 {
            type Output = $type_;
            #[inline]
            fn mul(self, rhs: $type_) -> $type_ {
                rhs * self
            }
        }

        impl std::ops::Div<f32> for $type_ {
            type Output = $type_;
            #[inline]
            fn div(self, rhs: f32) -> $type_ {
                self * rhs.recip()
            }
        }

        impl std::ops::AddAssign for $type_ {
            #[inline]
            fn add_assign(&mut self, rhs: $type_) {
                $( self.$field += rhs.$field; )+
            }
        }

        impl std::ops::SubAssign for $type_ {
            #[inline]
            fn sub_assign(&mut self, rhs: $type_) {
                $( self.$field -= rhs.$field; )+
            }
        }

        impl std::ops::MulAssign<f32> for $type_ {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $( self.$field *= rhs; )+
            }
        }

        impl std::ops::DivAssign<f32> for $type_ {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self *= rhs.recip();
            }
        }
    };
}

/// Operator sugar for motors and flectors: `a * b` is the geometric
/// antiproduct and `op >> x` applies the operator to `x`.
macro_rules! impl_operator_ops {
    ($type_:ident * [$($rhs:ident),+] >> [$($entity:ident),+]) => {
        $(
            impl std::ops::Mul<$rhs> for $type_ {
                type Output = <$type_ as geo_traits::Antigeo<$rhs>>::Output;
                #[inline]
                fn mul(self, rhs: $rhs) -> Self::Output {
                    geo_traits::Antigeo::antigeo(self, rhs)
                }
            }
        )+
        $(
            impl std::ops::Shr<$entity> for $type_ {
                type Output = <$type_ as geo_traits::Antisandwich<$entity>>::Output;
                #[inline]
                fn shr(self, rhs: $entity) -> Self::Output {
                    geo_traits::Antisandwich::antisandwich(self, rhs)
                }
            }
        )+
    };
}
