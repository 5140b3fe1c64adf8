use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Client::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Client::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Client::User).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MonitoringFrequency::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonitoringFrequency::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MonitoringFrequency::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MonitoringFrequency::SortOrder)
                            .string_len(10)
                            .default("asc"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Site::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Site::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Site::ClientId).integer().not_null())
                    .col(ColumnDef::new(Site::Geometry).json_binary().not_null())
                    .col(
                        ColumnDef::new(Site::MonitoringType)
                            .string_len(30)
                            .not_null()
                            .default("sentinel"),
                    )
                    .col(
                        ColumnDef::new(Site::MonitoringFrequencyId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Site::RelativeOrbit).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_client")
                            .from(Site::Table, Site::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_monitoring_frequency")
                            .from(Site::Table, Site::MonitoringFrequencyId)
                            .to(MonitoringFrequency::Table, MonitoringFrequency::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ModelRun::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModelRun::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ModelRun::SiteId).integer().not_null())
                    .col(
                        ColumnDef::new(ModelRun::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_model_run_site")
                            .from(ModelRun::Table, ModelRun::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MonitoringPoint::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonitoringPoint::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MonitoringPoint::Code).string_len(10))
                    .col(ColumnDef::new(MonitoringPoint::Geometry).json_binary())
                    .col(ColumnDef::new(MonitoringPoint::Height).double())
                    .col(ColumnDef::new(MonitoringPoint::HStdev).double())
                    .col(ColumnDef::new(MonitoringPoint::Vel).double())
                    .col(ColumnDef::new(MonitoringPoint::VStdev).double())
                    .col(ColumnDef::new(MonitoringPoint::Coherence).double())
                    .col(ColumnDef::new(MonitoringPoint::EffArea).double())
                    .col(ColumnDef::new(MonitoringPoint::ModelRunId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monitoring_point_model_run")
                            .from(MonitoringPoint::Table, MonitoringPoint::ModelRunId)
                            .to(ModelRun::Table, ModelRun::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monitoring_point_model_run")
                    .table(MonitoringPoint::Table)
                    .col(MonitoringPoint::ModelRunId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MonitoringSample::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonitoringSample::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MonitoringSample::MonitoringPointId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MonitoringSample::Date).date().not_null())
                    .col(ColumnDef::new(MonitoringSample::Value).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monitoring_sample_monitoring_point")
                            .from(MonitoringSample::Table, MonitoringSample::MonitoringPointId)
                            .to(MonitoringPoint::Table, MonitoringPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monitoring_sample_point_date")
                    .table(MonitoringSample::Table)
                    .col(MonitoringSample::MonitoringPointId)
                    .col(MonitoringSample::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitoringSample::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MonitoringPoint::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModelRun::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Site::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MonitoringFrequency::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client {
    Table,
    Id,
    Name,
    User,
}

#[derive(DeriveIden)]
enum MonitoringFrequency {
    Table,
    Id,
    Name,
    SortOrder,
}

#[derive(DeriveIden)]
enum Site {
    Table,
    Id,
    Name,
    ClientId,
    Geometry,
    MonitoringType,
    MonitoringFrequencyId,
    RelativeOrbit,
}

#[derive(DeriveIden)]
enum ModelRun {
    Table,
    Id,
    SiteId,
    Date,
}

#[derive(DeriveIden)]
enum MonitoringPoint {
    Table,
    Id,
    Code,
    Geometry,
    Height,
    HStdev,
    Vel,
    VStdev,
    Coherence,
    EffArea,
    ModelRunId,
}

#[derive(DeriveIden)]
enum MonitoringSample {
    Table,
    Id,
    MonitoringPointId,
    Date,
    Value,
}
