//! Token-2022 mint planning from a validated preset.
//!
//! A [`MintPlan`] is the ordered instruction sequence that realizes a preset
//! on chain: create the mint account with extension-aware space, run the
//! extension initializers, then `initialize_mint2`. Planning is pure; the
//! caller fetches rent and submits through `transactions`.

use anyhow::Context;
use presets::Preset;
use solana_instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account_interface::{
    address::get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token_2022_interface::{
    extension::{confidential_transfer, default_account_state, transfer_hook, ExtensionType},
    instruction::{initialize_mint2, initialize_permanent_delegate, mint_to_checked},
    solana_zk_sdk::encryption::pod::elgamal::PodElGamalPubkey,
    state::{AccountState, Mint},
};

/// The fixed parties of a mint bootstrap.
pub struct MintKeys {
    /// The mint account being created; its keypair co-signs the transaction.
    pub mint: Pubkey,
    /// Mint authority, freeze authority, and extension authority.
    pub authority: Pubkey,
    /// Pays rent for the mint account.
    pub payer: Pubkey,
}

pub struct MintPlan {
    pub mint: Pubkey,
    /// Account size covering the base mint and every configured extension.
    pub space: usize,
    pub instructions: Vec<Instruction>,
}

impl MintPlan {
    /// Plans the instruction sequence for `preset`. Fails on an invalid
    /// preset or an extension set Token-2022 rejects.
    pub fn from_preset(
        preset: &Preset,
        keys: &MintKeys,
        rent_lamports: u64,
    ) -> anyhow::Result<MintPlan> {
        preset
            .validate()
            .with_context(|| format!("Preset {} failed validation", preset.name))?;

        let token_program = spl_token_2022_interface::id();
        let features = &preset.features;

        let mut extensions = Vec::new();
        if features.transfer_hook {
            extensions.push(ExtensionType::TransferHook);
        }
        if features.confidential_transfers {
            extensions.push(ExtensionType::ConfidentialTransferMint);
        }
        if features.permanent_delegate {
            extensions.push(ExtensionType::PermanentDelegate);
        }
        if features.default_frozen {
            extensions.push(ExtensionType::DefaultAccountState);
        }

        let space = ExtensionType::try_calculate_account_len::<Mint>(&extensions)?;

        let mut instructions = vec![solana_system_interface::instruction::create_account(
            &keys.payer,
            &keys.mint,
            rent_lamports,
            space as u64,
            &token_program,
        )];

        // Extension initializers must run before `initialize_mint2`.
        if features.transfer_hook {
            instructions.push(transfer_hook::instruction::initialize(
                &token_program,
                &keys.mint,
                Some(keys.authority),
                Some(sss_interface::program::ID),
            )?);
        }
        if features.confidential_transfers {
            let auditor = preset
                .auditor
                .map(|bytes| bytemuck::pod_read_unaligned::<PodElGamalPubkey>(&bytes));
            instructions.push(confidential_transfer::instruction::initialize_mint(
                &token_program,
                &keys.mint,
                Some(keys.authority),
                // Allowlisted deployments vet each confidential account.
                !features.allowlist,
                auditor,
            )?);
        }
        if features.permanent_delegate {
            instructions.push(initialize_permanent_delegate(
                &token_program,
                &keys.mint,
                &keys.authority,
            )?);
        }
        if features.default_frozen {
            instructions.push(
                default_account_state::instruction::initialize_default_account_state(
                    &token_program,
                    &keys.mint,
                    &AccountState::Frozen,
                )?,
            );
        }

        let freeze_authority =
            (features.default_frozen || features.allowlist).then_some(&keys.authority);
        instructions.push(initialize_mint2(
            &token_program,
            &keys.mint,
            &keys.authority,
            freeze_authority,
            preset.decimals,
        )?);

        Ok(MintPlan {
            mint: keys.mint,
            space,
            instructions,
        })
    }

    /// Instructions funding `wallet` with `amount`: idempotent ATA creation
    /// followed by a checked mint-to.
    pub fn fund_wallet(
        &self,
        keys: &MintKeys,
        wallet: &Pubkey,
        amount: u64,
        decimals: u8,
    ) -> anyhow::Result<Vec<Instruction>> {
        let token_program = spl_token_2022_interface::id();
        let ata = get_associated_token_address_with_program_id(wallet, &self.mint, &token_program);

        Ok(vec![
            create_associated_token_account_idempotent(
                &keys.payer,
                wallet,
                &self.mint,
                &token_program,
            ),
            mint_to_checked(
                &token_program,
                &self.mint,
                &ata,
                &keys.authority,
                &[],
                amount,
                decimals,
            )?,
        ])
    }
}
