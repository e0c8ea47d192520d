//! Display masks for Brazilian identifiers.
//!
//! State always holds digits only; these helpers are applied at render time.
//! Partial input is masked progressively (typing "12345" shows "123.45"), and
//! extracting digits from a masked value returns the original digit string.

/// Strip everything that is not an ASCII digit and truncate to `max`.
pub fn digits(input: &str, max: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// CPF mask: `123.456.789-01`.
pub fn mask_cpf(input: &str) -> String {
    let clean = digits(input, 11);
    let mut out = String::with_capacity(14);
    for (i, c) in clean.chars().enumerate() {
        if i == 3 || i == 6 {
            out.push('.');
        }
        if i == 9 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// CNPJ mask: `12.345.678/9012-34`.
pub fn mask_cnpj(input: &str) -> String {
    let clean = digits(input, 14);
    let mut out = String::with_capacity(18);
    for (i, c) in clean.chars().enumerate() {
        if i == 2 || i == 5 {
            out.push('.');
        }
        if i == 8 {
            out.push('/');
        }
        if i == 12 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// CEP mask: `12345-678`.
pub fn mask_cep(input: &str) -> String {
    let clean = digits(input, 8);
    let mut out = String::with_capacity(9);
    for (i, c) in clean.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Mask a client document by its kind.
pub fn mask_documento(documento: &api::Documento) -> String {
    match documento {
        api::Documento::Cpf(d) => mask_cpf(d),
        api::Documento::Cnpj(d) => mask_cnpj(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strips_and_truncates() {
        assert_eq!(digits("12.345-678a90", 8), "12345678");
        assert_eq!(digits("abc", 8), "");
        assert_eq!(digits("123456789012345", 11), "12345678901");
    }

    #[test]
    fn masks_full_values() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
        assert_eq!(mask_cnpj("12345678000199"), "12.345.678/0001-99");
        assert_eq!(mask_cep("01310100"), "01310-100");
    }

    #[test]
    fn masks_partial_input_progressively() {
        assert_eq!(mask_cpf("12345"), "123.45");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
        assert_eq!(mask_cnpj("123"), "12.3");
        assert_eq!(mask_cnpj("123456789"), "12.345.678/9");
        assert_eq!(mask_cep("123456"), "12345-6");
    }

    #[test]
    fn mask_then_extract_digits_round_trips() {
        for cpf in ["12345678901", "00000000000", "98765432100"] {
            assert_eq!(digits(&mask_cpf(cpf), 11), cpf);
        }
        for cnpj in ["12345678000199", "00000000000000"] {
            assert_eq!(digits(&mask_cnpj(cnpj), 14), cnpj);
        }
        for cep in ["01310100", "99999999"] {
            assert_eq!(digits(&mask_cep(cep), 8), cep);
        }
    }
}
