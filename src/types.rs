/// Number of propositional variables, `A` to `Z`.
pub const MAX_VAR: u32 = 26;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Lit(i32);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Var(u32);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign { Pos, Neg, }

impl Lit {
    /// "no valid literal", returned by the codec on malformed input.
    pub const ERROR: Lit = Lit(0);

    pub fn from_i32(code: i32) -> Lit {
        Lit(code)
    }

    pub fn new(var: Var, sign: Sign) -> Lit {
        match sign {
            Sign::Pos => Lit(var.0 as i32),
            Sign::Neg => Lit(-(var.0 as i32)),
        }
    }

    pub fn to_i32(self) -> i32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 != 0 && self.0.unsigned_abs() <= MAX_VAR
    }

    pub fn var(self) -> Var {
        Var(self.0.unsigned_abs())
    }

    pub fn sign(self) -> Sign {
        if self.0 < 0 { Sign::Neg } else { Sign::Pos }
    }

    pub fn neg(self) -> Lit {
        Lit(-self.0)
    }
}

impl Var {
    pub fn from_u32(index: u32) -> Var {
        Var(index)
    }

    pub fn to_u32(self) -> u32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        (1..=MAX_VAR).contains(&self.0)
    }

    // mask of this variable inside one half of a clause bitmap, 0 if invalid.
    pub fn bit(self) -> u32 {
        if self.is_valid() { 1 << (self.0 - 1) } else { 0 }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_literal_is_invalid() {
        assert!(!Lit::ERROR.is_valid());
        assert_eq!(Lit::ERROR.to_i32(), 0);
    }

    #[test]
    fn test_validity_bounds() {
        assert!(Lit::from_i32(1).is_valid());
        assert!(Lit::from_i32(-26).is_valid());
        assert!(!Lit::from_i32(27).is_valid());
        assert!(!Lit::from_i32(-27).is_valid());
        assert!(!Lit::from_i32(i32::MIN).is_valid());
    }

    #[test]
    fn test_neg_and_sign() {
        let l = Lit::from_i32(3);
        assert_eq!(l.neg(), Lit::from_i32(-3));
        assert_eq!(l.neg().neg(), l);
        assert_eq!(l.sign(), Sign::Pos);
        assert_eq!(l.neg().sign(), Sign::Neg);
        assert_eq!(l.var(), l.neg().var());
    }

    #[test]
    fn test_new_from_var() {
        let v = Var::from_u32(5);
        assert_eq!(Lit::new(v, Sign::Pos).to_i32(), 5);
        assert_eq!(Lit::new(v, Sign::Neg).to_i32(), -5);
    }

    #[test]
    fn test_var_bits() {
        assert_eq!(Var::from_u32(1).bit(), 1);
        assert_eq!(Var::from_u32(26).bit(), 1 << 25);
        assert!(!Var::from_u32(0).is_valid());
        assert!(!Var::from_u32(27).is_valid());
    }

    #[test]
    fn test_invalid_var_has_no_bit() {
        for index in [0, 27, 32, 33, 64, u32::MAX] {
            assert_eq!(Var::from_u32(index).bit(), 0, "Var({index})");
        }
        assert_eq!(Lit::ERROR.var().bit(), 0);
        assert_eq!(Lit::from_i32(i32::MIN).var().bit(), 0);
    }
}
