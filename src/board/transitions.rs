use crate::api::PublicationStatus;

/// The legal destinations for a publication in the given status.
///
/// The workflow is directed and not symmetric:
/// nova → lida → enviada_adv ⇄ lida, and both lida and enviada_adv may
/// close out to concluida. Concluida is terminal.
pub fn allowed_moves(from: PublicationStatus) -> &'static [PublicationStatus] {
    use PublicationStatus::*;
    match from {
        Nova => &[Lida],
        Lida => &[EnviadaAdv, Concluida],
        EnviadaAdv => &[Lida, Concluida],
        Concluida => &[],
    }
}

/// Whether a drag-and-drop move between two columns is legal.
///
/// Moving a card onto its own column is never in the destination set, so it
/// is rejected like any other illegal move.
pub fn is_valid_move(from: PublicationStatus, to: PublicationStatus) -> bool {
    allowed_moves(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PublicationStatus::*;

    #[test]
    fn nova_only_moves_to_lida() {
        assert!(is_valid_move(Nova, Lida));
        assert!(!is_valid_move(Nova, EnviadaAdv));
        assert!(!is_valid_move(Nova, Concluida));
    }

    #[test]
    fn lida_moves_forward_or_closes() {
        assert!(is_valid_move(Lida, EnviadaAdv));
        assert!(is_valid_move(Lida, Concluida));
        assert!(!is_valid_move(Lida, Nova));
    }

    #[test]
    fn enviada_adv_can_return_or_close() {
        assert!(is_valid_move(EnviadaAdv, Lida));
        assert!(is_valid_move(EnviadaAdv, Concluida));
        assert!(!is_valid_move(EnviadaAdv, Nova));
    }

    #[test]
    fn concluida_is_terminal() {
        for to in PublicationStatus::ALL {
            assert!(!is_valid_move(Concluida, to));
        }
        assert!(allowed_moves(Concluida).is_empty());
    }

    #[test]
    fn same_status_is_never_legal() {
        for status in PublicationStatus::ALL {
            assert!(!is_valid_move(status, status));
        }
    }
}
