//! IR form port — read access to the command form.

use irpanel_domain::ir_command::IrCommand;

/// The form whose fields parameterise an IR command.
pub trait IrForm {
    /// Current field values, in document order.
    fn snapshot(&self) -> IrCommand;
}

impl<T: IrForm> IrForm for &T {
    fn snapshot(&self) -> IrCommand {
        (**self).snapshot()
    }
}

impl IrForm for IrCommand {
    fn snapshot(&self) -> IrCommand {
        self.clone()
    }
}
